//! Unified application error types for FileVault.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Reason a request was rejected as invalid input.
///
/// The display strings are the messages returned to clients.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Error, serde::Serialize, serde::Deserialize,
)]
pub enum ValidationError {
    /// No email was supplied on registration.
    #[error("Missing email")]
    MissingEmail,
    /// No password was supplied on registration.
    #[error("Missing password")]
    MissingPassword,
    /// A user with this email already exists.
    #[error("Error: User exists")]
    DuplicateEmail,
    /// The file name is empty.
    #[error("Missing name")]
    MissingName,
    /// The file type is absent or not one of `folder`, `file`, `image`.
    #[error("Missing type")]
    MissingType,
    /// A file or image upload carried no content.
    #[error("Missing data")]
    MissingData,
    /// The upload content is not valid base64.
    #[error("Invalid data")]
    InvalidData,
    /// The referenced parent does not exist.
    #[error("Parent not found")]
    ParentNotFound,
    /// The referenced parent is not a folder.
    #[error("Parent is not a folder")]
    ParentNotFolder,
    /// Walking the parent chain revisits a record.
    #[error("Parent chain contains a cycle")]
    ParentCycle,
    /// Content was requested for a folder.
    #[error("A folder doesn't have content")]
    IsFolder,
}

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input validation failed.
    Validation(ValidationError),
    /// A session token is absent, expired, or unknown.
    InvalidToken,
    /// Authentication failed; the caller must re-authenticate.
    Unauthorized,
    /// The requested resource was not found or is not visible to the caller.
    NotFound,
    /// A uniqueness constraint was violated at the store layer.
    Conflict,
    /// The document store failed.
    Database,
    /// The key-value store failed.
    Cache,
    /// The blob store failed.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(_) => write!(f, "VALIDATION"),
            Self::InvalidToken => write!(f, "INVALID_TOKEN"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Cache => write!(f, "CACHE"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout FileVault.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error for the given reason.
    pub fn validation(reason: ValidationError) -> Self {
        Self::new(ErrorKind::Validation(reason), reason.to_string())
    }

    /// Create an invalid-token error.
    pub fn invalid_token() -> Self {
        Self::new(ErrorKind::InvalidToken, "Invalid token")
    }

    /// Create an unauthorized error.
    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized, "Unauthorized")
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a cache error.
    pub fn cache(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Cache, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Return the validation reason, if this is a validation error.
    pub fn validation_reason(&self) -> Option<ValidationError> {
        match self.kind {
            ErrorKind::Validation(reason) => Some(reason),
            _ => None,
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(reason: ValidationError) -> Self {
        Self::validation(reason)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
