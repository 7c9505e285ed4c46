//! Sign-in and sign-out.

pub mod service;

pub use service::AuthService;
