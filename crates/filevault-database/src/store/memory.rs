//! In-memory document store backed by `DashMap`.

use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use filevault_core::error::AppError;
use filevault_core::result::AppResult;
use filevault_core::traits::DocumentStore;
use filevault_core::traits::document::{Document, ID_FIELD, matches};

/// Document store kept entirely in process memory.
///
/// Each collection is a vector in insertion order. Writes to one collection
/// hold that collection's shard lock, so a single insert or update is atomic.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: DashMap<String, Vec<Document>>,
    unique_fields: HashMap<String, Vec<String>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inserts into `collection` that repeat an existing `field` value.
    pub fn with_unique_field(mut self, collection: &str, field: &str) -> Self {
        self.unique_fields
            .entry(collection.to_string())
            .or_default()
            .push(field.to_string());
        self
    }

    fn check_unique(&self, collection: &str, docs: &[Document], doc: &Document) -> AppResult<()> {
        let id = doc.get(ID_FIELD);
        if docs.iter().any(|d| d.get(ID_FIELD) == id) {
            return Err(AppError::conflict(format!(
                "Duplicate {ID_FIELD} in collection '{collection}'"
            )));
        }

        let Some(fields) = self.unique_fields.get(collection) else {
            return Ok(());
        };
        for field in fields {
            let Some(value) = doc.get(field) else {
                continue;
            };
            if docs.iter().any(|d| d.get(field) == Some(value)) {
                return Err(AppError::conflict(format!(
                    "Duplicate value for '{field}' in collection '{collection}'"
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn find_one(&self, collection: &str, filter: &Document) -> AppResult<Option<Document>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| matches(d, filter)).cloned()))
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Document,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Document>> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .filter(|d| matches(d, filter))
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> AppResult<String> {
        let id = match document.get(ID_FIELD) {
            Some(Value::String(id)) => id.clone(),
            _ => {
                let id = Uuid::new_v4().to_string();
                document.insert(ID_FIELD.to_string(), Value::String(id.clone()));
                id
            }
        };

        let mut docs = self.collections.entry(collection.to_string()).or_default();
        self.check_unique(collection, &docs, &document)?;
        docs.push(document);

        debug!(collection, id = %id, "Inserted document");
        Ok(id)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Document,
        patch: &Document,
    ) -> AppResult<u64> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(0);
        };
        let Some(doc) = docs.iter_mut().find(|d| matches(d, filter)) else {
            return Ok(0);
        };
        for (key, value) in patch {
            doc.insert(key.clone(), value.clone());
        }
        Ok(1)
    }

    async fn count(&self, collection: &str) -> AppResult<u64> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.len() as u64)
            .unwrap_or(0))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
