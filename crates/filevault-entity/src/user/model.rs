//! User entity model.

use filevault_core::types::UserId;
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Email address, unique across users.
    pub email: String,
    /// One-way digest of the password.
    pub password: String,
}

impl User {
    /// Build a user record from registration data with a fresh id.
    pub fn from_create(input: CreateUser) -> Self {
        Self {
            id: UserId::new(),
            email: input.email,
            password: input.password_hash,
        }
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
