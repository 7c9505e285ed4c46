//! User repository implementation.

use std::sync::Arc;

use serde_json::json;

use filevault_core::result::AppResult;
use filevault_core::traits::DocumentStore;
use filevault_core::traits::document::{from_document, into_document, to_document};
use filevault_core::types::UserId;
use filevault_entity::user::{CreateUser, User};

use crate::store::USERS;

/// Repository for user lookups and registration.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let filter = into_document(json!({ "_id": id.to_string() }))?;
        self.store
            .find_one(USERS, &filter)
            .await?
            .map(from_document)
            .transpose()
    }

    /// Find a user by exact email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let filter = into_document(json!({ "email": email }))?;
        self.store
            .find_one(USERS, &filter)
            .await?
            .map(from_document)
            .transpose()
    }

    /// Insert a new user.
    ///
    /// A concurrent registration of the same email surfaces as a `Conflict`
    /// error from the store's unique index.
    pub async fn create(&self, data: CreateUser) -> AppResult<User> {
        let user = User::from_create(data);
        self.store.insert_one(USERS, to_document(&user)?).await?;
        Ok(user)
    }

    /// Count all users.
    pub async fn count(&self) -> AppResult<u64> {
        self.store.count(USERS).await
    }
}
