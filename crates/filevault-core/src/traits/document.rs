//! Document store trait over JSON documents grouped in collections.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AppError, ErrorKind};
use crate::result::AppResult;

/// A stored document: a JSON object.
pub type Document = serde_json::Map<String, Value>;

/// Field holding a document's identifier.
pub const ID_FIELD: &str = "_id";

/// Trait for document database backends.
///
/// Filters are exact-match: a document matches when every field of the
/// filter is present in the document with an equal value. Results of
/// [`find`](DocumentStore::find) come back in insertion order.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g., "memory", "postgres").
    fn backend(&self) -> &str;

    /// Find the first document matching the filter.
    async fn find_one(&self, collection: &str, filter: &Document) -> AppResult<Option<Document>>;

    /// Find matching documents, skipping `skip` and returning at most `limit`.
    async fn find(
        &self,
        collection: &str,
        filter: &Document,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Document>>;

    /// Insert a document and return its identifier.
    ///
    /// A string `_id` already present in the document is kept; otherwise one
    /// is generated.
    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<String>;

    /// Merge `patch` into the first document matching the filter.
    /// Returns the number of matched documents (0 or 1).
    async fn update_one(&self, collection: &str, filter: &Document, patch: &Document)
    -> AppResult<u64>;

    /// Count all documents in a collection.
    async fn count(&self, collection: &str) -> AppResult<u64>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Whether `document` satisfies the exact-match `filter`.
pub fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

/// Convert a JSON value into a [`Document`], rejecting non-objects.
pub fn into_document(value: Value) -> AppResult<Document> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::new(
            ErrorKind::Serialization,
            format!("Expected a JSON object, got {other}"),
        )),
    }
}

/// Serialize a value into a [`Document`].
pub fn to_document<T: serde::Serialize>(value: &T) -> AppResult<Document> {
    into_document(serde_json::to_value(value)?)
}

/// Deserialize a [`Document`] into a typed value.
pub fn from_document<T: serde::de::DeserializeOwned>(document: Document) -> AppResult<T> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
