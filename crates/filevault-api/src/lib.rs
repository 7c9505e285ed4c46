//! # filevault-api
//!
//! HTTP API layer for FileVault built on Axum.
//!
//! Exposes the user, session, file, and system endpoints, the `X-Token`
//! extractor, request logging, and the mapping from [`AppError`] to HTTP
//! responses. Handlers carry no business rules; they translate between the
//! wire format and the service layer.
//!
//! [`AppError`]: filevault_core::AppError

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
