use app_dto::tour::{PatchTourActiveInput, UpsertTourInput};
use app_error::AppError;
use app_schema::tours::Tour;
use app_state::AppState;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::*;
use uuid::Uuid;

pub async fn get_admin_tours(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Tour>>, AppError> {
    let pg = state.pg.clone();
    let res = sqlx::query_as::<_, Tour>(Tour::select_list_query())
        .fetch_all(&pg)
        .await?;
    Ok(Json(res))
}

pub async fn post_tour(
    State(state): State<Arc<AppState>>,
    Json(args): Json<UpsertTourInput>,
) -> Result<StatusCode, AppError> {
    validate_tour(&args)?;
    let pg = state.pg.clone();
    sqlx::query(Tour::insert_query())
        .bind(&args.slug)
        .bind(&args.title)
        .bind(&args.description)
        .bind(&args.duration)
        .bind(args.price_dkk)
        .bind(args.max_guests)
        .bind(args.is_active)
        .execute(&pg)
        .await?;
    info!("Tour {} created", &args.slug);
    Ok(StatusCode::CREATED)
}

pub async fn put_tour(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(args): Json<UpsertTourInput>,
) -> Result<StatusCode, AppError> {
    validate_tour(&args)?;
    let pg = state.pg.clone();
    let result = sqlx::query(Tour::update_query())
        .bind(&args.slug)
        .bind(&args.title)
        .bind(&args.description)
        .bind(&args.duration)
        .bind(args.price_dkk)
        .bind(args.max_guests)
        .bind(args.is_active)
        .bind(id)
        .execute(&pg)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Tour not found"));
    }
    info!("Tour {} updated", id);
    Ok(StatusCode::OK)
}

pub async fn patch_tour_active(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(args): Json<PatchTourActiveInput>,
) -> Result<StatusCode, AppError> {
    let pg = state.pg.clone();
    let result = sqlx::query(Tour::set_active_query())
        .bind(args.is_active)
        .bind(id)
        .execute(&pg)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Tour not found"));
    }
    info!("Tour {} active -> {}", id, args.is_active);
    Ok(StatusCode::OK)
}

pub async fn delete_tour(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let pg = state.pg.clone();
    let result = sqlx::query(Tour::delete_query())
        .bind(id)
        .execute(&pg)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Tour not found"));
    }
    info!("Tour {} deleted", id);
    Ok(StatusCode::OK)
}

fn validate_tour(args: &UpsertTourInput) -> Result<(), AppError> {
    if args.slug.trim().is_empty() || args.title.trim().is_empty() {
        return Err(AppError::bad_request("Slug and title are required"));
    }
    if args.price_dkk < 0 {
        return Err(AppError::bad_request("Price must not be negative"));
    }
    if args.max_guests < 1 {
        return Err(AppError::bad_request("Max guests must be at least 1"));
    }
    Ok(())
}
