use app_error::AppError;
use app_schema::messages::ContactMessage;
use app_state::AppState;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::*;
use uuid::Uuid;

pub async fn get_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let pg = state.pg.clone();
    let res = sqlx::query_as::<_, ContactMessage>(ContactMessage::select_list_query())
        .fetch_all(&pg)
        .await?;
    Ok(Json(res))
}

pub async fn patch_message_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let pg = state.pg.clone();
    let result = sqlx::query(ContactMessage::mark_read_query())
        .bind(id)
        .execute(&pg)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Message not found"));
    }
    debug!("Message {} marked as read", id);
    Ok(StatusCode::OK)
}

pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let pg = state.pg.clone();
    let result = sqlx::query(ContactMessage::delete_query())
        .bind(id)
        .execute(&pg)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Message not found"));
    }
    info!("Message {} deleted", id);
    Ok(StatusCode::OK)
}
