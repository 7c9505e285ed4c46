//! File service: creation with parent checks, lookup, listing, publishing,
//! and content retrieval.

use std::collections::HashSet;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use filevault_auth::acl::{AccessIntent, AuthorizationGuard};
use filevault_core::error::{AppError, ErrorKind, ValidationError};
use filevault_core::result::AppResult;
use filevault_core::traits::StorageProvider;
use filevault_core::types::{FileId, PageRequest};
use filevault_database::repositories::file::FileRepository;
use filevault_entity::file::{FileRecord, ParentId};

use crate::context::RequestContext;

use super::upload::CreateFileRequest;

/// Handles file record operations on behalf of an authenticated user.
#[derive(Debug, Clone)]
pub struct FileService {
    file_repo: Arc<FileRepository>,
    storage: Arc<dyn StorageProvider>,
    guard: Arc<AuthorizationGuard>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        storage: Arc<dyn StorageProvider>,
        guard: Arc<AuthorizationGuard>,
    ) -> Self {
        Self {
            file_repo,
            storage,
            guard,
        }
    }

    /// Creates a folder, file, or image owned by the caller.
    ///
    /// Content is written to the blob store before the record is inserted.
    /// If the insert fails the blob is removed again on a best-effort basis.
    pub async fn create(&self, ctx: &RequestContext, req: CreateFileRequest) -> AppResult<FileRecord> {
        let upload = req.validate()?;
        let id = FileId::new();

        let parent_id = upload.parent?;
        if let ParentId::Folder(parent) = parent_id {
            self.check_parent(ctx, id, parent).await?;
        }

        let local_path = match upload.content {
            Some(bytes) => Some(self.storage.write(bytes).await?),
            None => None,
        };

        let record = FileRecord {
            id,
            owner_id: ctx.user_id,
            name: upload.name,
            file_type: upload.file_type,
            is_public: upload.is_public,
            parent_id,
            local_path,
        };

        if let Err(e) = self.file_repo.create(&record).await {
            if let Some(path) = &record.local_path {
                if let Err(cleanup) = self.storage.delete(path).await {
                    warn!(file_id = %id, path = %path, error = %cleanup, "Failed to remove orphaned content");
                }
            }
            return Err(e);
        }

        info!(
            user_id = %ctx.user_id,
            file_id = %record.id,
            file_type = %record.file_type,
            parent_id = %record.parent_id,
            "File created"
        );
        Ok(record)
    }

    /// Fetches a record the caller may read.
    pub async fn get(&self, ctx: &RequestContext, id: FileId) -> AppResult<FileRecord> {
        self.load(ctx, id, AccessIntent::Read).await
    }

    /// Lists one page of the caller's records under `parent`.
    ///
    /// Pages hold up to 20 records in insertion order. Each call reads the
    /// store afresh; nothing is cached between pages.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        parent: ParentId,
        page: u64,
    ) -> AppResult<Vec<FileRecord>> {
        self.file_repo
            .find_by_owner_and_parent(ctx.user_id, parent, &PageRequest::page(page))
            .await
    }

    /// Sets `isPublic` on a record the caller owns.
    pub async fn set_public(
        &self,
        ctx: &RequestContext,
        id: FileId,
        is_public: bool,
    ) -> AppResult<FileRecord> {
        let mut record = self.load(ctx, id, AccessIntent::Write).await?;

        if !self.file_repo.set_public(id, is_public).await? {
            return Err(AppError::not_found("Not found"));
        }
        record.is_public = is_public;

        info!(user_id = %ctx.user_id, file_id = %id, is_public, "File visibility changed");
        Ok(record)
    }

    /// Returns the content of a file or image the caller may read.
    ///
    /// Returns the record too so callers can label the content.
    pub async fn read_content(
        &self,
        ctx: &RequestContext,
        id: FileId,
    ) -> AppResult<(FileRecord, Bytes)> {
        let record = self.load(ctx, id, AccessIntent::Read).await?;
        if record.is_folder() {
            return Err(ValidationError::IsFolder.into());
        }
        let path = record
            .local_path
            .as_deref()
            .ok_or_else(|| AppError::not_found("Not found"))?;
        let data = self.storage.read(path).await.map_err(|e| {
            if e.kind == ErrorKind::NotFound {
                warn!(file_id = %id, "Content missing from blob store");
                AppError::not_found("Not found")
            } else {
                e
            }
        })?;
        Ok((record, data))
    }

    /// Loads a record and applies the access check, collapsing both a missing
    /// record and a denial into `NotFound`.
    async fn load(
        &self,
        ctx: &RequestContext,
        id: FileId,
        intent: AccessIntent,
    ) -> AppResult<FileRecord> {
        let record = self
            .file_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))?;
        self.guard.require_file_access(ctx.user_id, &record, intent)?;
        Ok(record)
    }

    /// Validates the parent of a record about to be created with `new_id`.
    async fn check_parent(
        &self,
        ctx: &RequestContext,
        new_id: FileId,
        parent_id: FileId,
    ) -> AppResult<()> {
        let parent = self
            .file_repo
            .find_by_id(parent_id)
            .await?
            .filter(|p| {
                self.guard
                    .authorize_file_access(ctx.user_id, p, AccessIntent::Read)
                    .is_allowed()
            })
            .ok_or(ValidationError::ParentNotFound)?;

        if !parent.is_folder() {
            return Err(ValidationError::ParentNotFolder.into());
        }

        // Walk up to the root. Revisiting a record, or meeting the id about
        // to be assigned, means the chain would loop.
        let mut visited = HashSet::from([new_id]);
        let mut current = parent;
        loop {
            if !visited.insert(current.id) {
                return Err(ValidationError::ParentCycle.into());
            }
            let Some(next) = current.parent_id.folder() else {
                return Ok(());
            };
            match self.file_repo.find_by_id(next).await? {
                Some(record) => current = record,
                None => return Ok(()),
            }
        }
    }
}
