//! Session token lifecycle: issue, authenticate, revoke.

pub mod manager;
pub mod store;

pub use manager::TokenService;
pub use store::SessionStore;
