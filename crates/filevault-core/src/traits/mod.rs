//! Store traits defined in `filevault-core` and implemented by other crates.

pub mod cache;
pub mod document;
pub mod storage;

pub use cache::CacheProvider;
pub use document::{Document, DocumentStore};
pub use storage::StorageProvider;
