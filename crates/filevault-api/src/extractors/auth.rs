//! `AuthUser` extractor: resolves the `X-Token` header to a request context.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use filevault_auth::credentials::X_TOKEN_HEADER;
use filevault_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = x_token(parts);
        let user_id = state.guard.require_user(token.as_deref()).await?;

        Ok(AuthUser(RequestContext::new(user_id)))
    }
}

/// The raw `X-Token` header, if any, without resolving it.
#[derive(Debug, Clone)]
pub struct SessionTokenHeader(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for SessionTokenHeader {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionTokenHeader(x_token(parts)))
    }
}

/// Reads the `X-Token` header. Non-ASCII or empty values count as absent.
fn x_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(X_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}
