//! # filevault-entity
//!
//! Domain entity models for FileVault. Users and file records are stored as
//! JSON documents, so every persisted struct derives `Serialize` and
//! `Deserialize` with the field names used in the stored documents.

pub mod file;
pub mod session;
pub mod user;
