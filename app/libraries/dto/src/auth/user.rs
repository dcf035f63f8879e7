use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PostUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct PatchChangePasswordInput {
    pub email: String,
    pub password: String,
    pub new_password: String,
}
