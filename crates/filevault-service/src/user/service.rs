//! User registration and self lookup.

use std::sync::Arc;

use tracing::info;

use filevault_auth::password::PasswordHasher;
use filevault_core::error::{AppError, ErrorKind, ValidationError};
use filevault_core::result::AppResult;
use filevault_database::repositories::user::UserRepository;
use filevault_entity::user::{CreateUser, User};

use crate::context::RequestContext;
use crate::fields::string_or_none;

/// Registration input. Non-string values count as absent.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RegisterRequest {
    /// Login email.
    #[serde(default, deserialize_with = "string_or_none")]
    pub email: Option<String>,
    /// Plaintext password.
    #[serde(default, deserialize_with = "string_or_none")]
    pub password: Option<String>,
}

/// Handles user registration and profile lookup.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Registers a new user.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<User> {
        let email = req
            .email
            .filter(|e| !e.is_empty())
            .ok_or(ValidationError::MissingEmail)?;
        let password = req
            .password
            .filter(|p| !p.is_empty())
            .ok_or(ValidationError::MissingPassword)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ValidationError::DuplicateEmail.into());
        }

        let user = self
            .user_repo
            .create(CreateUser {
                email,
                password_hash: self.hasher.hash(&password),
            })
            .await
            .map_err(|e| {
                if e.kind == ErrorKind::Conflict {
                    AppError::validation(ValidationError::DuplicateEmail)
                } else {
                    e
                }
            })?;

        info!(user_id = %user.id, email = %user.email, "User registered");
        Ok(user)
    }

    /// Returns the authenticated user.
    ///
    /// A live token whose user no longer exists is treated as unauthorized.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(AppError::unauthorized)
    }
}
