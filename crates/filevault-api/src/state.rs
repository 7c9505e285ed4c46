//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use filevault_auth::AuthorizationGuard;
use filevault_service::{AuthService, FileService, SystemService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Resolves `X-Token` headers to users.
    pub guard: Arc<AuthorizationGuard>,
    /// Registration and profile lookup.
    pub user_service: Arc<UserService>,
    /// Connect and disconnect.
    pub auth_service: Arc<AuthService>,
    /// File and folder records.
    pub file_service: Arc<FileService>,
    /// Store health and counts.
    pub system_service: Arc<SystemService>,
}
