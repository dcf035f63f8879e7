use app_dto::settings::PutSettingsInput;
use app_error::AppError;
use app_schema::settings::Settings;
use app_state::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::*;

pub async fn get_settings(State(state): State<Arc<AppState>>) -> Result<Json<Settings>, AppError> {
    let pg = state.pg.clone();
    let settings = sqlx::query_as::<_, Settings>(Settings::select_query())
        .fetch_optional(&pg)
        .await?
        .ok_or_else(|| AppError::internal("Settings row is missing; run the seed binary"))?;
    Ok(Json(settings))
}

pub async fn put_settings(
    State(state): State<Arc<AppState>>,
    Json(args): Json<PutSettingsInput>,
) -> Result<StatusCode, AppError> {
    let pg = state.pg.clone();
    // Single-row table, so the update carries no WHERE clause.
    let result = sqlx::query(Settings::update_query())
        .bind(&args.company_name)
        .bind(&args.email)
        .bind(&args.phone)
        .bind(&args.website)
        .bind(&args.address)
        .bind(args.notify_on_booking)
        .bind(args.notify_on_cancellation)
        .bind(args.auto_confirm_bookings)
        .execute(&pg)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::internal("Settings row is missing; run the seed binary"));
    }
    info!("Settings updated");
    Ok(StatusCode::OK)
}
