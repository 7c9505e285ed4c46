//! # filevault-storage
//!
//! Blob storage for file content. Content is written under freshly generated
//! names and addressed afterwards by the reference the provider returns.
//!
//! The local filesystem provider sits behind the default `local` feature.

pub mod providers;

#[cfg(feature = "local")]
pub use providers::LocalStorageProvider;
