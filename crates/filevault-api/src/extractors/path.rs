//! Typed path parameter helpers.

use filevault_core::error::AppError;
use filevault_core::types::FileId;

/// Parses a file id from a path segment.
///
/// An id that cannot name any record is reported exactly like a missing one.
pub fn parse_file_id(s: &str) -> Result<FileId, AppError> {
    s.parse().map_err(|_| AppError::not_found("Not found"))
}
