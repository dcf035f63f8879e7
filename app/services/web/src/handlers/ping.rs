use axum::http::StatusCode;

pub async fn ping() -> (StatusCode, &'static str) {
    (StatusCode::OK, "pong")
}
