//! Token service: issues, resolves, and revokes session tokens.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use filevault_core::clock::Clock;
use filevault_core::config::AuthConfig;
use filevault_core::error::AppError;
use filevault_core::result::AppResult;
use filevault_core::types::UserId;
use filevault_entity::session::SessionToken;

use super::store::SessionStore;

/// Attempts at finding an unused token before giving up.
const MAX_ISSUE_ATTEMPTS: usize = 3;

/// Issues and resolves opaque session tokens.
///
/// Expiry is absolute: reading a token never extends its lifetime.
#[derive(Debug, Clone)]
pub struct TokenService {
    store: Arc<SessionStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl TokenService {
    /// Creates a new token service.
    pub fn new(store: Arc<SessionStore>, clock: Arc<dyn Clock>, config: &AuthConfig) -> Self {
        Self {
            store,
            clock,
            ttl: Duration::from_secs(config.token_ttl_seconds),
        }
    }

    /// Issues a fresh token for the user.
    pub async fn issue(&self, user_id: UserId) -> AppResult<SessionToken> {
        for attempt in 1..=MAX_ISSUE_ATTEMPTS {
            let token = Uuid::new_v4().to_string();
            if self.store.put(&token, user_id, self.ttl).await? {
                let ttl = chrono::Duration::from_std(self.ttl)
                    .map_err(|e| AppError::internal(format!("Token TTL out of range: {e}")))?;
                info!(user_id = %user_id, "Issued session token");
                return Ok(SessionToken {
                    token,
                    user_id,
                    expires_at: self.clock.now() + ttl,
                });
            }
            warn!(attempt, "Generated session token already in use");
        }
        Err(AppError::internal("Failed to allocate a unique session token"))
    }

    /// Resolves a token to its user.
    ///
    /// Fails with `InvalidToken` when the token is empty, unknown, expired,
    /// or maps to something that is not a user id.
    pub async fn authenticate(&self, token: &str) -> AppResult<UserId> {
        if token.is_empty() {
            return Err(AppError::invalid_token());
        }
        let Some(raw) = self.store.lookup(token).await? else {
            debug!("Unknown or expired session token");
            return Err(AppError::invalid_token());
        };
        raw.parse::<UserId>().map_err(|_| {
            warn!("Session token maps to an unparsable user id");
            AppError::invalid_token()
        })
    }

    /// Revokes a token. A token that is not live fails with `InvalidToken`.
    pub async fn revoke(&self, token: &str) -> AppResult<()> {
        if token.is_empty() || !self.store.remove(token).await? {
            return Err(AppError::invalid_token());
        }
        info!("Revoked session token");
        Ok(())
    }
}
