use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PutSettingsInput {
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    #[serde(default)]
    pub notify_on_booking: bool,
    #[serde(default)]
    pub notify_on_cancellation: bool,
    #[serde(default)]
    pub auto_confirm_bookings: bool,
}
