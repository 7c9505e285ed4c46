//! File record repository implementation.

use std::sync::Arc;

use serde_json::{Value, json};

use filevault_core::result::AppResult;
use filevault_core::traits::DocumentStore;
use filevault_core::traits::document::{from_document, into_document, to_document};
use filevault_core::types::{FileId, PageRequest, UserId};
use filevault_entity::file::{FileRecord, ParentId};

use crate::store::FILES;

/// Repository for file record queries and the single permitted mutation.
#[derive(Debug, Clone)]
pub struct FileRepository {
    store: Arc<dyn DocumentStore>,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find a record by ID.
    pub async fn find_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>> {
        let filter = into_document(json!({ "_id": id.to_string() }))?;
        self.store
            .find_one(FILES, &filter)
            .await?
            .map(from_document)
            .transpose()
    }

    /// List one page of an owner's records under `parent`, in insertion order.
    pub async fn find_by_owner_and_parent(
        &self,
        owner_id: UserId,
        parent: ParentId,
        page: &PageRequest,
    ) -> AppResult<Vec<FileRecord>> {
        let filter = into_document(json!({
            "userId": owner_id.to_string(),
            "parentId": parent.to_json(),
        }))?;
        self.store
            .find(FILES, &filter, page.skip(), page.limit())
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    /// Insert a record. Its id is kept as given.
    pub async fn create(&self, record: &FileRecord) -> AppResult<()> {
        self.store.insert_one(FILES, to_document(record)?).await?;
        Ok(())
    }

    /// Set `isPublic` on a record. Returns `false` if no record matched.
    pub async fn set_public(&self, id: FileId, is_public: bool) -> AppResult<bool> {
        let filter = into_document(json!({ "_id": id.to_string() }))?;
        let patch = into_document(json!({ "isPublic": Value::Bool(is_public) }))?;
        let matched = self.store.update_one(FILES, &filter, &patch).await?;
        Ok(matched > 0)
    }

    /// Count all records.
    pub async fn count(&self) -> AppResult<u64> {
        self.store.count(FILES).await
    }
}
