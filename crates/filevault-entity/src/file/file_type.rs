//! File type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use filevault_core::{AppError, ValidationError};

/// Kind of a file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// A container for other records. Has no content.
    Folder,
    /// A regular file with content.
    File,
    /// An image with content.
    Image,
}

impl FileType {
    /// Whether this type is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder)
    }

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folder" => Ok(Self::Folder),
            "file" => Ok(Self::File),
            "image" => Ok(Self::Image),
            _ => Err(AppError::validation(ValidationError::MissingType)),
        }
    }
}
