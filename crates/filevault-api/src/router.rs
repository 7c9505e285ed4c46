//! Route definitions for the FileVault HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::Router;
use axum::routing::{get, post, put};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route bound to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(system_routes())
        .merge(user_routes())
        .merge(session_routes())
        .merge(file_routes())
        .with_state(state)
}

/// Store health and counts
fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::system::status))
        .route("/stats", get(handlers::system::stats))
}

/// Registration and profile
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register))
        .route("/users/me", get(handlers::user::me))
}

/// Token issue and revocation
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/connect", get(handlers::auth::connect))
        .route("/disconnect", get(handlers::auth::disconnect))
}

/// File and folder records and content
fn file_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/files",
            get(handlers::file::list_files).post(handlers::file::create_file),
        )
        .route("/files/{id}", get(handlers::file::get_file))
        .route("/files/{id}/publish", put(handlers::file::publish_file))
        .route("/files/{id}/unpublish", put(handlers::file::unpublish_file))
        .route("/files/{id}/data", get(handlers::file::file_data))
}
