//! # filevault-core
//!
//! Core crate for FileVault. Contains the store traits, configuration
//! schemas, typed identifiers, the clock abstraction, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other FileVault crates.

pub mod clock;
pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind, ValidationError};
pub use result::AppResult;
