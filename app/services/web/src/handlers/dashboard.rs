use app_error::AppError;
use app_rollup::{BookingRecord, DashboardStats, dashboard_stats};
use app_schema::bookings::Booking;
use app_schema::messages::ContactMessage;
use app_state::AppState;
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::*;

/// The two reads are independent; the rollup runs only after both succeed.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardStats>, AppError> {
    let pg = state.pg.clone();
    let bookings = sqlx::query_as::<_, BookingRecord>(Booking::select_rollup_query()).fetch_all(&pg);
    let unread = sqlx::query_scalar::<_, i64>(ContactMessage::count_unread_query()).fetch_one(&pg);
    let (bookings, unread) = tokio::try_join!(bookings, unread)?;

    debug!("Dashboard rollup over {} bookings", bookings.len());
    Ok(Json(dashboard_stats(&bookings, unread)))
}
