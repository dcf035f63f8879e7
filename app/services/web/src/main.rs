mod handlers;
mod routings;

use app_config::AppConfig;
use app_log::init_tracing;
use app_state::AppState;
use dotenv::dotenv;
use std::sync::Arc;
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tracing::info;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let config = AppConfig::new();
    init_tracing(config.log_level.clone());

    info!("Initializing state...");
    let state = match AppState::new(config).await {
        Ok(state) => Arc::new(state),
        Err(e) => panic!("Cannot initialize connection pools! {}", e),
    };

    let address = state.config.backend_bind.clone();
    let app = routings::router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .expect("Cannot bind backend address");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
