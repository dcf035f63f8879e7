use app_error::AppError;
use app_schema::tours::Tour;
use app_state::AppState;
use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

#[derive(Template)]
#[template(path = "tour.html")]
struct TourPage {
    tour: Tour,
}

pub async fn get_tour(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let pg = state.pg.clone();
    let tour = sqlx::query_as::<_, Tour>(&format!(
        "{} WHERE slug = $1 AND is_active = TRUE",
        Tour::select_base()
    ))
    .bind(&slug)
    .fetch_optional(&pg)
    .await?
    .ok_or_else(|| AppError::not_found("Tour not found"))?;

    let page = TourPage { tour };
    Ok(Html(page.render()?))
}
