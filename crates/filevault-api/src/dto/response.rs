//! Response DTOs.
//!
//! Field names follow the wire format clients already use (`userId`,
//! `isPublic`, `parentId`). Storage details such as the content reference
//! never appear here.

use serde::{Deserialize, Serialize};

use filevault_core::types::{FileId, UserId};
use filevault_entity::file::{FileRecord, FileType, ParentId};
use filevault_entity::session::SessionToken;
use filevault_entity::user::User;

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Email.
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Issued session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Value for the `X-Token` header.
    pub token: String,
}

impl From<SessionToken> for TokenResponse {
    fn from(session: SessionToken) -> Self {
        Self {
            token: session.token,
        }
    }
}

/// Public view of a file, image, or folder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResponse {
    /// Record ID.
    pub id: FileId,
    /// Owner.
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Record kind.
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Whether non-owners may read it.
    #[serde(rename = "isPublic")]
    pub is_public: bool,
    /// `0` for the root, otherwise the folder id.
    #[serde(rename = "parentId")]
    pub parent_id: ParentId,
}

impl From<FileRecord> for FileResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.owner_id,
            name: record.name,
            file_type: record.file_type,
            is_public: record.is_public,
            parent_id: record.parent_id,
        }
    }
}
