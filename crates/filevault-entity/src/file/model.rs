//! File record entity model.

use filevault_core::types::{FileId, UserId};
use serde::{Deserialize, Serialize};

use super::file_type::FileType;
use super::parent::ParentId;

/// Metadata for a file, image, or folder.
///
/// Only `is_public` changes after creation. `local_path` is set for
/// non-folder records and holds the blob store's content reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique record identifier.
    #[serde(rename = "_id")]
    pub id: FileId,
    /// The owning user.
    #[serde(rename = "userId")]
    pub owner_id: UserId,
    /// Display name.
    pub name: String,
    /// Record kind.
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Whether non-owners may read the record.
    #[serde(rename = "isPublic")]
    pub is_public: bool,
    /// Containing folder, or the root.
    #[serde(rename = "parentId")]
    pub parent_id: ParentId,
    /// Content reference in the blob store.
    #[serde(rename = "localPath", default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

impl FileRecord {
    /// Whether this record is a folder.
    pub fn is_folder(&self) -> bool {
        self.file_type.is_folder()
    }

    /// Whether the given user owns this record.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}
