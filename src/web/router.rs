//! Router configuration for the Web UI.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{index, list_files, serve_file, upload_file, AppState};

/// Create the main router.
///
/// `max_upload_size` bounds the request body accepted by the upload route.
pub fn create_router(app_state: Arc<AppState>, max_upload_size: usize) -> Router {
    let api_routes = Router::new().route("/files", get(list_files));

    Router::new()
        .route(
            "/",
            get(index).post(upload_file).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/files/:filename", get(serve_file))
        .nest("/api", api_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
