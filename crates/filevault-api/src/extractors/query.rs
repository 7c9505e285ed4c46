//! Query parameters for listing files.

use serde::Deserialize;

use filevault_entity::file::ParentId;

/// `GET /files?parentId=&page=`.
///
/// Both values arrive as raw strings so that bad input degrades instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilesQuery {
    /// `0` or absent for the root, otherwise a folder id.
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
    /// Zero-based page number.
    pub page: Option<String>,
}

impl ListFilesQuery {
    /// The parent to list under, or `None` if the value names no record.
    pub fn parent(&self) -> Option<ParentId> {
        match self.parent_id.as_deref().map(str::trim) {
            None | Some("") => Some(ParentId::Root),
            Some(raw) => raw.parse().ok(),
        }
    }

    /// The requested page. Anything that is not a non-negative integer is page 0.
    pub fn page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(0)
    }
}
