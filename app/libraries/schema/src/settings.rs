use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Single-row table; the admin form updates it in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Settings {
    pub id: Uuid,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    pub notify_on_booking: bool,
    pub notify_on_cancellation: bool,
    pub auto_confirm_bookings: bool,
    pub updated_at: DateTime<Utc>,
}

impl Settings {
    #[inline]
    pub fn select_query() -> &'static str {
        include_str!("../../../SQL/settings/select_base.sql")
    }

    #[inline]
    pub fn update_query() -> &'static str {
        include_str!("../../../SQL/settings/update.sql")
    }

    #[inline]
    pub fn insert_default_query() -> &'static str {
        include_str!("../../../SQL/settings/insert_default.sql")
    }
}
