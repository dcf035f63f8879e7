use app_dto::booking::{PatchBookingStatusInput, PatchPaymentStatusInput};
use app_error::AppError;
use app_schema::bookings::Booking;
use app_state::AppState;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::*;
use uuid::Uuid;

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let pg = state.pg.clone();
    let res = sqlx::query_as::<_, Booking>(Booking::select_list_query())
        .fetch_all(&pg)
        .await?;
    Ok(Json(res))
}

pub async fn patch_booking_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(args): Json<PatchBookingStatusInput>,
) -> Result<StatusCode, AppError> {
    let pg = state.pg.clone();
    let result = sqlx::query(Booking::set_status_query())
        .bind(args.status.as_str())
        .bind(id)
        .execute(&pg)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Booking not found"));
    }
    info!("Booking {} -> {}", id, args.status);
    Ok(StatusCode::OK)
}

pub async fn patch_payment_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(args): Json<PatchPaymentStatusInput>,
) -> Result<StatusCode, AppError> {
    let pg = state.pg.clone();
    let result = sqlx::query(Booking::set_payment_status_query())
        .bind(args.payment_status.as_str())
        .bind(id)
        .execute(&pg)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Booking not found"));
    }
    info!("Booking {} payment -> {}", id, args.payment_status);
    Ok(StatusCode::OK)
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let pg = state.pg.clone();
    let result = sqlx::query(Booking::delete_query())
        .bind(id)
        .execute(&pg)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Booking not found"));
    }
    info!("Booking {} deleted", id);
    Ok(StatusCode::OK)
}
