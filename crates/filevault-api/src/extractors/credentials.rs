//! `BasicAuth` extractor for the connect endpoint.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use filevault_auth::credentials::{BasicCredentials, parse_basic};
use filevault_core::error::AppError;

use crate::error::ApiError;

/// Email and password from an `Authorization: Basic` header.
///
/// A missing or malformed header rejects the request as `Unauthorized`.
#[derive(Debug, Clone)]
pub struct BasicAuth(pub BasicCredentials);

impl<S: Send + Sync> FromRequestParts<S> for BasicAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(AppError::unauthorized)?;

        Ok(BasicAuth(parse_basic(header)?))
    }
}
