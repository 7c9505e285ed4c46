//! # filevault-database
//!
//! Document store backends (in-memory and PostgreSQL JSONB) and the
//! repositories for users and file records built on top of them.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{MemoryDocumentStore, PgDocumentStore, connect_document_store};
