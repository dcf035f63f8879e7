use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PostContactInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}
