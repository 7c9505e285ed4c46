//! Reports backing store health and record counts.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use filevault_auth::session::SessionStore;
use filevault_core::result::AppResult;
use filevault_core::traits::DocumentStore;
use filevault_database::repositories::{FileRepository, UserRepository};

/// Reachability of the backing stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemStatus {
    /// Key-value store holding session tokens.
    pub redis: bool,
    /// Document store holding users and files.
    pub db: bool,
}

/// Number of stored records per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemStats {
    /// Registered users.
    pub users: u64,
    /// File and folder records.
    pub files: u64,
}

/// Health and statistics over the backing stores.
#[derive(Debug, Clone)]
pub struct SystemService {
    documents: Arc<dyn DocumentStore>,
    sessions: Arc<SessionStore>,
    user_repo: Arc<UserRepository>,
    file_repo: Arc<FileRepository>,
}

impl SystemService {
    /// Creates a new system service.
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        sessions: Arc<SessionStore>,
        user_repo: Arc<UserRepository>,
        file_repo: Arc<FileRepository>,
    ) -> Self {
        Self {
            documents,
            sessions,
            user_repo,
            file_repo,
        }
    }

    /// Checks both stores. A failing check reports `false` instead of an error.
    pub async fn status(&self) -> SystemStatus {
        let (redis, db) = tokio::join!(self.sessions.health_check(), self.documents.health_check());
        SystemStatus {
            redis: healthy("key-value", redis),
            db: healthy("document", db),
        }
    }

    /// Counts users and file records.
    pub async fn stats(&self) -> AppResult<SystemStats> {
        let (users, files) = tokio::try_join!(self.user_repo.count(), self.file_repo.count())?;
        Ok(SystemStats { users, files })
    }
}

fn healthy(store: &str, result: AppResult<bool>) -> bool {
    match result {
        Ok(up) => up,
        Err(e) => {
            warn!(store, error = %e, "Store health check failed");
            false
        }
    }
}
