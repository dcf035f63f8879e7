use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    #[inline]
    pub fn select_list_query() -> &'static str {
        include_str!("../../../SQL/messages/select_list.sql")
    }

    #[inline]
    pub fn insert_query() -> &'static str {
        include_str!("../../../SQL/messages/insert.sql")
    }

    #[inline]
    pub fn mark_read_query() -> &'static str {
        include_str!("../../../SQL/messages/mark_read.sql")
    }

    #[inline]
    pub fn delete_query() -> &'static str {
        include_str!("../../../SQL/messages/delete.sql")
    }

    #[inline]
    pub fn count_unread_query() -> &'static str {
        include_str!("../../../SQL/messages/count_unread.sql")
    }
}
