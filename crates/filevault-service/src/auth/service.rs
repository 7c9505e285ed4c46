//! Sign-in with email and password, sign-out by token.

use std::sync::Arc;

use tracing::{info, warn};

use filevault_auth::password::PasswordHasher;
use filevault_auth::session::TokenService;
use filevault_core::error::{AppError, ErrorKind};
use filevault_core::result::AppResult;
use filevault_database::repositories::user::UserRepository;
use filevault_entity::session::SessionToken;

/// Exchanges credentials for session tokens and revokes them.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            tokens,
        }
    }

    /// Verifies credentials and issues a session token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn connect(&self, email: &str, password: &str) -> AppResult<SessionToken> {
        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) if self.hasher.verify(password, &user.password) => user,
            _ => {
                warn!(email = %email, "Rejected sign-in");
                return Err(AppError::unauthorized());
            }
        };

        let token = self.tokens.issue(user.id).await?;
        info!(user_id = %user.id, "User signed in");
        Ok(token)
    }

    /// Revokes the presented token.
    pub async fn disconnect(&self, token: Option<&str>) -> AppResult<()> {
        let token = token.ok_or_else(AppError::unauthorized)?;
        self.tokens.revoke(token).await.map_err(|e| {
            if e.kind == ErrorKind::InvalidToken {
                AppError::unauthorized()
            } else {
                e
            }
        })
    }
}
