//! Parent reference of a file record.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use filevault_core::types::FileId;

/// Where a record sits in the hierarchy.
///
/// The root is stored as the number `0`; a folder parent is stored as the
/// folder's id string. Deserialization also accepts the string `"0"` for the
/// root, which is how query strings carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParentId {
    /// Top level of the owner's tree.
    #[default]
    Root,
    /// Inside the given folder.
    Folder(FileId),
}

impl ParentId {
    /// Return the folder id, or `None` at the root.
    pub fn folder(&self) -> Option<FileId> {
        match self {
            Self::Root => None,
            Self::Folder(id) => Some(*id),
        }
    }

    /// The stored JSON form used in document filters.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Root => serde_json::Value::from(0),
            Self::Folder(id) => serde_json::Value::from(id.to_string()),
        }
    }
}

impl From<FileId> for ParentId {
    fn from(id: FileId) -> Self {
        Self::Folder(id)
    }
}

impl fmt::Display for ParentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "0"),
            Self::Folder(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for ParentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "0" {
            return Ok(Self::Root);
        }
        s.parse::<FileId>().map(Self::Folder)
    }
}

impl Serialize for ParentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Root => serializer.serialize_u64(0),
            Self::Folder(id) => serializer.collect_str(id),
        }
    }
}

struct ParentIdVisitor;

impl Visitor<'_> for ParentIdVisitor {
    type Value = ParentId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0 or a folder id")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ParentId, E> {
        if v == 0 {
            Ok(ParentId::Root)
        } else {
            Err(E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ParentId, E> {
        if v == 0 {
            Ok(ParentId::Root)
        } else {
            Err(E::invalid_value(de::Unexpected::Signed(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ParentId, E> {
        v.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for ParentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ParentIdVisitor)
    }
}
