use serde::Deserialize;

/// Shared by create (POST) and update (PUT).
#[derive(Debug, Deserialize)]
pub struct UpsertTourInput {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub price_dkk: i64,
    pub max_guests: i32,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct PatchTourActiveInput {
    pub is_active: bool,
}
