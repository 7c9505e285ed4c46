//! Authorization guard: authenticated user resolution and file access checks.

use std::sync::Arc;

use tracing::debug;

use filevault_core::error::{AppError, ErrorKind};
use filevault_core::result::AppResult;
use filevault_core::types::UserId;
use filevault_entity::file::FileRecord;

use crate::session::TokenService;

/// What the caller wants to do with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessIntent {
    /// View metadata or content.
    Read,
    /// Change the record.
    Write,
}

/// Why access was denied. Kept internal; callers see `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// Writes are reserved to the owner.
    NotOwner,
    /// The record is private and the caller is not its owner.
    Private,
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The operation may proceed.
    Allowed,
    /// The operation is refused.
    Denied(DenialReason),
}

impl AccessDecision {
    /// Whether access was granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Gatekeeper in front of every user-data operation.
#[derive(Debug, Clone)]
pub struct AuthorizationGuard {
    tokens: Arc<TokenService>,
}

impl AuthorizationGuard {
    /// Creates a new guard.
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Resolves the presented token to a user.
    ///
    /// A missing or invalid token becomes `Unauthorized` without saying which.
    /// Store failures are passed through unchanged.
    pub async fn require_user(&self, token: Option<&str>) -> AppResult<UserId> {
        let token = token.ok_or_else(AppError::unauthorized)?;
        self.tokens.authenticate(token).await.map_err(|e| {
            if e.kind == ErrorKind::InvalidToken {
                AppError::unauthorized()
            } else {
                e
            }
        })
    }

    /// Decides whether `user_id` may act on `file`.
    ///
    /// Writes require ownership even on public records. Reads are allowed to
    /// the owner and to anyone when the record is public.
    pub fn authorize_file_access(
        &self,
        user_id: UserId,
        file: &FileRecord,
        intent: AccessIntent,
    ) -> AccessDecision {
        if file.is_owned_by(user_id) {
            return AccessDecision::Allowed;
        }
        match intent {
            AccessIntent::Write => AccessDecision::Denied(DenialReason::NotOwner),
            AccessIntent::Read if file.is_public => AccessDecision::Allowed,
            AccessIntent::Read => AccessDecision::Denied(DenialReason::Private),
        }
    }

    /// Like [`authorize_file_access`](Self::authorize_file_access) but a
    /// denial is reported as `NotFound`, the same as a missing record.
    pub fn require_file_access(
        &self,
        user_id: UserId,
        file: &FileRecord,
        intent: AccessIntent,
    ) -> AppResult<()> {
        match self.authorize_file_access(user_id, file, intent) {
            AccessDecision::Allowed => Ok(()),
            AccessDecision::Denied(reason) => {
                debug!(user_id = %user_id, file_id = %file.id, ?reason, ?intent, "File access denied");
                Err(AppError::not_found("Not found"))
            }
        }
    }
}
