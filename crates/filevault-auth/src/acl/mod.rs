//! Per-file access control for owners and public readers.

pub mod checker;

pub use checker::{AccessDecision, AccessIntent, AuthorizationGuard, DenialReason};
