//! Document store backends.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use tracing::info;

use filevault_core::config::DatabaseConfig;
use filevault_core::error::AppError;
use filevault_core::result::AppResult;
use filevault_core::traits::DocumentStore;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;

/// Collection holding user documents.
pub const USERS: &str = "users";
/// Collection holding file record documents.
pub const FILES: &str = "files";

/// Build the document store selected by `config.provider`.
///
/// The PostgreSQL backend connects and applies migrations before returning.
pub async fn connect_document_store(config: &DatabaseConfig) -> AppResult<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match config.provider.as_str() {
        "memory" => Arc::new(MemoryDocumentStore::new().with_unique_field(USERS, "email")),
        "postgres" => {
            let pool = DatabasePool::connect(config).await?;
            run_migrations(pool.pool()).await?;
            Arc::new(PgDocumentStore::new(pool))
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Expected 'memory' or 'postgres'"
            )));
        }
    };

    info!(backend = store.backend(), "Document store initialized");
    Ok(store)
}
