//! Custom Axum extractors.

pub mod auth;
pub mod credentials;
pub mod path;
pub mod query;

pub use auth::{AuthUser, SessionTokenHeader};
pub use credentials::BasicAuth;
pub use query::ListFilesQuery;
