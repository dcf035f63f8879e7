use crate::handlers::{
    admin_tours::*, book::*, bookings::*, contact::*, customers::*, dashboard::*, index::*,
    login::*, messages::*, ping::*, settings::*, tours::*, user::*,
};
use app_middleware::admin_auth_middleware;
use app_state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, patch, post, put},
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    let asset_path = state.config.asset_path.clone();
    let asset_service = ServeDir::new(&asset_path).append_index_html_on_directories(true);

    Router::new()
        .route("/", get(get_index))
        .route("/tours/{slug}", get(get_tour))
        .route("/book", get(get_book).post(post_book))
        .route("/contact", get(get_contact).post(post_contact))
        .route("/privacy", get(get_privacy))
        .route("/admin", get(get_login))
        .route("/login", post(post_login))
        .route("/ping", get(ping).post(ping))
        .nest(
            "/auth",
            Router::new()
                .route("/ping", get(ping).post(ping))
                .route("/logout", post(post_logout))
                .route("/user", get(get_user).post(post_user))
                .route("/change_password", patch(patch_change_password))
                .route("/dashboard", get(get_dashboard))
                .route("/bookings", get(get_bookings))
                .route("/bookings/{id}/status", patch(patch_booking_status))
                .route("/bookings/{id}/payment", patch(patch_payment_status))
                .route("/bookings/{id}", delete(delete_booking))
                .route("/customers", get(get_customers))
                .route("/messages", get(get_messages))
                .route("/messages/{id}/read", patch(patch_message_read))
                .route("/messages/{id}", delete(delete_message))
                .route("/tours", get(get_admin_tours).post(post_tour))
                .route("/tours/{id}", put(put_tour).delete(delete_tour))
                .route("/tours/{id}/active", patch(patch_tour_active))
                .route("/settings", get(get_settings).put(put_settings))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    admin_auth_middleware,
                )),
        )
        .nest_service("/assets", asset_service)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
