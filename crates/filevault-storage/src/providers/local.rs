//! Local filesystem storage provider.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use filevault_core::config::StorageConfig;
use filevault_core::error::{AppError, ErrorKind};
use filevault_core::result::AppResult;
use filevault_core::traits::storage::StorageProvider;

/// Local filesystem storage provider.
///
/// Content references are absolute paths of files directly under the root.
/// A reference that points anywhere else is reported as missing.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create the provider, creating the root directory if needed.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        Self::with_root(&config.root_path).await
    }

    /// Create a provider rooted at the given path.
    pub async fn with_root(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref();
        fs::create_dir_all(root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        let root = fs::canonicalize(root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to resolve storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Root directory holding the content files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a content reference to a path under the root, or `None` if the
    /// reference escapes it.
    fn resolve(&self, content_ref: &str) -> Option<PathBuf> {
        let path = Path::new(content_ref);
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::CurDir))
        {
            return None;
        }
        if path.parent() != Some(self.root.as_path()) {
            return None;
        }
        Some(path.to_path_buf())
    }

    fn resolve_or_not_found(&self, content_ref: &str) -> AppResult<PathBuf> {
        self.resolve(content_ref)
            .ok_or_else(|| AppError::not_found(format!("Content not found: {content_ref}")))
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn write(&self, data: Bytes) -> AppResult<String> {
        let full_path = self.root.join(Uuid::new_v4().to_string());

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {}", full_path.display()),
                e,
            )
        })?;

        let content_ref = full_path.to_string_lossy().into_owned();
        debug!(path = %content_ref, bytes = data.len(), "Wrote content");
        Ok(content_ref)
    }

    async fn read(&self, content_ref: &str) -> AppResult<Bytes> {
        let full_path = self.resolve_or_not_found(content_ref)?;
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Content not found: {content_ref}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read file: {content_ref}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn exists(&self, content_ref: &str) -> AppResult<bool> {
        let Some(full_path) = self.resolve(content_ref) else {
            return Ok(false);
        };
        match fs::metadata(&full_path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to stat file: {content_ref}"),
                e,
            )),
        }
    }

    async fn delete(&self, content_ref: &str) -> AppResult<()> {
        let Some(full_path) = self.resolve(content_ref) else {
            return Ok(());
        };
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(path = %content_ref, "Deleted content");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete file: {content_ref}"),
                e,
            )),
        }
    }
}
