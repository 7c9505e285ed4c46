//! # filevault-service
//!
//! Business logic service layer for FileVault. Each service orchestrates
//! repositories, the blob store, and the auth components to implement one
//! group of use cases.
//!
//! Services follow constructor injection. All dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod fields;
pub mod file;
pub mod system;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use context::RequestContext;
pub use file::{CreateFileRequest, FileService};
pub use system::{SystemService, SystemStats, SystemStatus};
pub use user::{RegisterRequest, UserService};
