use app_schema::bookings::{BookingStatus, PaymentStatus};
use serde::Deserialize;

/// Public booking form. Numeric/date fields arrive as strings so that bad
/// input can be reported back on the form instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct PostBookingInput {
    pub tour: String, // slug
    pub date: String, // YYYY-MM-DD
    pub guests: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PatchBookingStatusInput {
    pub status: BookingStatus,
}

#[derive(Debug, Deserialize)]
pub struct PatchPaymentStatusInput {
    pub payment_status: PaymentStatus,
}
