//! Session token entity.

use chrono::{DateTime, Utc};
use filevault_core::types::UserId;
use serde::{Deserialize, Serialize};

/// An issued session token.
///
/// Tokens live only in the key-value store; this value is what the token
/// service hands back on issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// The opaque token string presented by clients.
    pub token: String,
    /// The user the token authenticates.
    pub user_id: UserId,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}
