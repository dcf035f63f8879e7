use app_error::AppError;
use app_schema::tours::Tour;
use app_state::AppState;
use askama::Template;
use axum::{extract::State, response::Html};
use std::sync::Arc;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage {
    tours: Vec<Tour>,
}

pub async fn get_index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let pg = state.pg.clone();
    let tours = sqlx::query_as::<_, Tour>(Tour::select_active_query())
        .fetch_all(&pg)
        .await?;
    let page = IndexPage { tours };
    Ok(Html(page.render()?))
}

#[derive(Template)]
#[template(path = "privacy.html")]
struct PrivacyPage;

pub async fn get_privacy() -> Result<Html<String>, AppError> {
    let page = PrivacyPage;
    Ok(Html(page.render()?))
}
