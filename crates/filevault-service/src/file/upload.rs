//! Upload request and its field-level validation.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;

use filevault_core::error::ValidationError;
use filevault_entity::file::{FileType, ParentId};

use crate::fields::{string_or_none, truthy};

/// Body of a create-file request, as sent by clients.
///
/// Fields are kept loose so that each problem is reported with its own
/// validation message, in a fixed order. A string field holding another JSON
/// type counts as absent, and `isPublic` follows JSON truthiness.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFileRequest {
    /// Display name.
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    /// One of `folder`, `file`, `image`.
    #[serde(rename = "type", default, deserialize_with = "string_or_none")]
    pub file_type: Option<String>,
    /// `0` for the root, or a folder id.
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<Value>,
    /// Whether other users may read the record.
    #[serde(rename = "isPublic", default, deserialize_with = "truthy")]
    pub is_public: bool,
    /// Base64-encoded content. Required unless the type is `folder`.
    #[serde(default, deserialize_with = "string_or_none")]
    pub data: Option<String>,
}

/// A request that passed the field checks.
#[derive(Debug, Clone)]
pub(crate) struct ValidatedUpload {
    pub name: String,
    pub file_type: FileType,
    pub is_public: bool,
    /// `Err` when the parent reference cannot name any record.
    pub parent: Result<ParentId, ValidationError>,
    /// Decoded content for non-folders.
    pub content: Option<Bytes>,
}

impl CreateFileRequest {
    /// Checks name, then type, then data.
    ///
    /// The parent reference is parsed but not judged here; a malformed one is
    /// reported as `ParentNotFound` only after these field checks pass.
    pub(crate) fn validate(self) -> Result<ValidatedUpload, ValidationError> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::MissingName)?;

        let file_type = self
            .file_type
            .as_deref()
            .and_then(|t| t.parse::<FileType>().ok())
            .ok_or(ValidationError::MissingType)?;

        let content = if file_type.is_folder() {
            None
        } else {
            let data = self
                .data
                .filter(|d| !d.is_empty())
                .ok_or(ValidationError::MissingData)?;
            let bytes = STANDARD
                .decode(data.trim())
                .map_err(|_| ValidationError::InvalidData)?;
            Some(Bytes::from(bytes))
        };

        Ok(ValidatedUpload {
            name,
            file_type,
            is_public: self.is_public,
            parent: parse_parent(self.parent_id.as_ref()),
            content,
        })
    }
}

/// Interprets the raw `parentId` value. Absent, `0`, and `"0"` mean root.
fn parse_parent(raw: Option<&Value>) -> Result<ParentId, ValidationError> {
    match raw {
        None | Some(Value::Null) => Ok(ParentId::Root),
        Some(value) => {
            serde_json::from_value(value.clone()).map_err(|_| ValidationError::ParentNotFound)
        }
    }
}
