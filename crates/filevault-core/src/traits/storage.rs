//! Blob storage trait for file content.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for content storage backends.
///
/// The provider chooses where content lives and hands back an opaque
/// content reference; callers store that reference and pass it back
/// verbatim to read or delete.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store bytes under a freshly generated reference and return it.
    async fn write(&self, data: Bytes) -> AppResult<String>;

    /// Read the content behind a reference.
    ///
    /// Unknown references fail with a `NotFound` error.
    async fn read(&self, content_ref: &str) -> AppResult<Bytes>;

    /// Check whether content exists for a reference.
    async fn exists(&self, content_ref: &str) -> AppResult<bool>;

    /// Delete the content behind a reference. Missing content is not an error.
    async fn delete(&self, content_ref: &str) -> AppResult<()>;
}
