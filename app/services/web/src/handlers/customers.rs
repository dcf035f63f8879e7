use app_error::AppError;
use app_rollup::{BookingRecord, CustomerAggregate, aggregate_customers};
use app_schema::bookings::Booking;
use app_state::AppState;
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::*;

/// Customers are derived from booking history, most recent booking first.
pub async fn get_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerAggregate>>, AppError> {
    let pg = state.pg.clone();
    let bookings = sqlx::query_as::<_, BookingRecord>(Booking::select_rollup_query())
        .fetch_all(&pg)
        .await?;
    let customers = aggregate_customers(&bookings);
    debug!("{} unique customers", customers.len());
    Ok(Json(customers))
}
