//! Route handlers organized by domain.

pub mod auth;
pub mod file;
pub mod system;
pub mod user;

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Reads a JSON request body regardless of `Content-Type`.
///
/// An empty body, or one that is not a JSON object, becomes `T::default()`
/// so that field validation reports what is missing. Request types decide
/// per field how to treat a value of the wrong JSON type.
pub(crate) fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }

    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Unreadable JSON body");
            T::default()
        }
    }
}
