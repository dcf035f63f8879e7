use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PostLoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct PostLoginOutput {
    pub access_token: String,
    pub refresh_token: String,
}
