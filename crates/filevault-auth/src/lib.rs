//! # filevault-auth
//!
//! Authentication and authorization for FileVault.
//!
//! ## Modules
//!
//! - `password`: one-way password digests
//! - `session`: session token issue, lookup, and revocation
//! - `acl`: per-file access decisions for owners and public readers
//! - `credentials`: parsing of the `Authorization` and `X-Token` headers

pub mod acl;
pub mod credentials;
pub mod password;
pub mod session;

pub use acl::{AccessDecision, AccessIntent, AuthorizationGuard, DenialReason};
pub use password::PasswordHasher;
pub use session::{SessionStore, TokenService};
