//! Request context carrying the authenticated user.

use filevault_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built at the HTTP boundary once the session token has been resolved and
/// passed into service methods so every operation knows who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
