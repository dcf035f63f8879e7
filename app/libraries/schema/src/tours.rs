use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tour {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub price_dkk: i64,
    pub max_guests: i32,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Tour {
    #[inline]
    pub fn select_base() -> &'static str {
        include_str!("../../../SQL/tours/select_base.sql")
    }

    #[inline]
    pub fn select_active_query() -> &'static str {
        include_str!("../../../SQL/tours/select_active.sql")
    }

    #[inline]
    pub fn select_list_query() -> &'static str {
        include_str!("../../../SQL/tours/select_list.sql")
    }

    #[inline]
    pub fn insert_query() -> &'static str {
        include_str!("../../../SQL/tours/insert.sql")
    }

    #[inline]
    pub fn update_query() -> &'static str {
        include_str!("../../../SQL/tours/update.sql")
    }

    #[inline]
    pub fn set_active_query() -> &'static str {
        include_str!("../../../SQL/tours/set_active.sql")
    }

    #[inline]
    pub fn delete_query() -> &'static str {
        include_str!("../../../SQL/tours/delete.sql")
    }

    #[inline]
    pub fn upsert_query() -> &'static str {
        include_str!("../../../SQL/tours/upsert.sql")
    }
}
