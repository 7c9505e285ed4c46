//! Session handlers: connect and disconnect.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::{BasicAuth, SessionTokenHeader};
use crate::state::AppState;

/// GET /connect
///
/// Exchanges Basic credentials for a session token.
pub async fn connect(
    State(state): State<AppState>,
    BasicAuth(credentials): BasicAuth,
) -> Result<Json<TokenResponse>, ApiError> {
    let session = state
        .auth_service
        .connect(&credentials.email, &credentials.password)
        .await?;
    Ok(Json(session.into()))
}

/// GET /disconnect
pub async fn disconnect(
    State(state): State<AppState>,
    SessionTokenHeader(token): SessionTokenHeader,
) -> Result<StatusCode, ApiError> {
    state.auth_service.disconnect(token.as_deref()).await?;
    Ok(StatusCode::NO_CONTENT)
}
