//! PostgreSQL document store over a JSONB table.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use tracing::debug;
use uuid::Uuid;

use filevault_core::error::{AppError, ErrorKind};
use filevault_core::result::AppResult;
use filevault_core::traits::DocumentStore;
use filevault_core::traits::document::{Document, ID_FIELD};

use crate::connection::DatabasePool;

/// Document store backed by the `documents` table.
///
/// Filters use JSONB containment (`body @> filter`), which for flat
/// scalar filters is exact field equality. Order follows `seq`.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    db: DatabasePool,
}

impl PgDocumentStore {
    /// Create a store on an open pool. Migrations must already be applied.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

fn db_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &str {
        "postgres"
    }

    async fn find_one(&self, collection: &str, filter: &Document) -> AppResult<Option<Document>> {
        sqlx::query_scalar::<_, Json<Document>>(
            "SELECT body FROM documents WHERE collection = $1 AND body @> $2 ORDER BY seq LIMIT 1",
        )
        .bind(collection)
        .bind(Json(filter))
        .fetch_optional(self.db.pool())
        .await
        .map(|row| row.map(|Json(doc)| doc))
        .map_err(db_error("Failed to find document"))
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Document,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Document>> {
        let rows = sqlx::query_scalar::<_, Json<Document>>(
            "SELECT body FROM documents WHERE collection = $1 AND body @> $2 \
             ORDER BY seq LIMIT $3 OFFSET $4",
        )
        .bind(collection)
        .bind(Json(filter))
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .bind(i64::try_from(skip).unwrap_or(i64::MAX))
        .fetch_all(self.db.pool())
        .await
        .map_err(db_error("Failed to list documents"))?;

        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> AppResult<String> {
        let id = match document.get(ID_FIELD) {
            Some(Value::String(id)) => id.clone(),
            _ => {
                let id = Uuid::new_v4().to_string();
                document.insert(ID_FIELD.to_string(), Value::String(id.clone()));
                id
            }
        };

        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(&id)
            .bind(Json(&document))
            .execute(self.db.pool())
            .await
            .map_err(|e| {
                let duplicate =
                    matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
                if duplicate {
                    AppError::with_source(
                        ErrorKind::Conflict,
                        format!("Duplicate document in collection '{collection}'"),
                        e,
                    )
                } else {
                    AppError::with_source(ErrorKind::Database, "Failed to insert document", e)
                }
            })?;

        debug!(collection, id = %id, "Inserted document");
        Ok(id)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Document,
        patch: &Document,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE documents SET body = body || $3 WHERE seq = ( \
                 SELECT seq FROM documents WHERE collection = $1 AND body @> $2 \
                 ORDER BY seq LIMIT 1)",
        )
        .bind(collection)
        .bind(Json(filter))
        .bind(Json(patch))
        .execute(self.db.pool())
        .await
        .map_err(db_error("Failed to update document"))?;

        Ok(result.rows_affected())
    }

    async fn count(&self, collection: &str) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_one(self.db.pool())
            .await
            .map_err(db_error("Failed to count documents"))?;
        Ok(total.max(0) as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.db.ping().await
    }
}
