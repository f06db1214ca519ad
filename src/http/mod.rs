//! HTTP surface: `POST /pause`, `GET /history`, `GET /health`.
//! The same routes are also served under `/api`.

pub mod handlers;
pub mod responses;

use crate::core::PauseService;
use crate::errors::AppResult;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub type SharedService = Arc<PauseService>;

fn routes() -> Router<SharedService> {
    Router::new()
        .route("/pause", post(handlers::toggle_pause))
        .route("/history", get(handlers::history))
        .route("/health", get(handlers::health))
}

/// Build the application router.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .merge(routes())
        .nest("/api", routes())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Bind `address` and serve until Ctrl-C.
pub async fn serve(service: SharedService, address: &str) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(address = %listener.local_addr()?, "rPauseLogger listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("rPauseLogger stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler available: run until killed
        std::future::pending::<()>().await;
    }
}
