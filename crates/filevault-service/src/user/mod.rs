//! User registration and profile lookup.

pub mod service;

pub use service::{RegisterRequest, UserService};
