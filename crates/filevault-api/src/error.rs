//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use filevault_core::error::{AppError, ErrorKind};

/// Message sent for any failure that is not the caller's fault.
const INTERNAL_MESSAGE: &str = "An error occurred while processing your request.";

/// Standard API error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
}

/// Status code and client-facing message for an error.
///
/// Store failures and other internal errors never leak their details.
pub fn status_and_message(err: &AppError) -> (StatusCode, String) {
    match err.kind {
        ErrorKind::Validation(reason) => (StatusCode::BAD_REQUEST, reason.to_string()),
        ErrorKind::InvalidToken | ErrorKind::Unauthorized => {
            (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
        }
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        ErrorKind::Conflict
        | ErrorKind::Database
        | ErrorKind::Cache
        | ErrorKind::Storage
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => (
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_MESSAGE.to_string(),
        ),
    }
}

/// HTTP-facing wrapper around [`AppError`].
///
/// Handlers return `Result<_, ApiError>` and use `?` on service calls.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, message) = status_and_message(&err);
        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
        }

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}
