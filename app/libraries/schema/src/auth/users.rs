use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    #[inline]
    pub fn select_query() -> &'static str {
        include_str!("../../../../SQL/auth/users/select_base.sql")
    }

    #[inline]
    pub fn insert_query() -> &'static str {
        include_str!("../../../../SQL/auth/users/insert.sql")
    }

    #[inline]
    pub fn change_password_query() -> &'static str {
        include_str!("../../../../SQL/auth/users/change_password.sql")
    }

    #[inline]
    pub fn upsert_query() -> &'static str {
        include_str!("../../../../SQL/auth/users/upsert.sql")
    }
}
