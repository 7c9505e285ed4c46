//! User registration and profile handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use filevault_service::RegisterRequest;

use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::parse_body;
use crate::state::AppState;

/// POST /users
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let request: RegisterRequest = parse_body(&body);
    let user = state.user_service.register(request).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.me(&auth).await?;
    Ok(Json(user.into()))
}
