//! SHA-256 password digests.

use sha2::{Digest, Sha256};

/// Computes deterministic one-way password digests.
///
/// The same password always yields the same digest, so stored digests can be
/// matched directly in a document filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Lowercase hex SHA-256 digest of the password.
    pub fn hash(&self, password: &str) -> String {
        format!("{:x}", Sha256::digest(password.as_bytes()))
    }

    /// Checks a password against a stored digest.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        self.hash(password) == digest
    }
}
