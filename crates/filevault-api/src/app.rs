//! Application builder: wires router, middleware, and state into an Axum app.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;

use filevault_core::config::ServerConfig;

use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Uploads arrive base64 encoded inside JSON, so the body limit applies to
/// the encoded size.
pub fn build_app(state: AppState, server: &ServerConfig) -> Router {
    build_router(state)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
}
