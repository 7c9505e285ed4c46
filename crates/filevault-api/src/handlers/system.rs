//! Health and statistics handlers.

use axum::Json;
use axum::extract::State;

use filevault_service::{SystemStats, SystemStatus};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /status
pub async fn status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(state.system_service.status().await)
}

/// GET /stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<SystemStats>, ApiError> {
    Ok(Json(state.system_service.stats().await?))
}
