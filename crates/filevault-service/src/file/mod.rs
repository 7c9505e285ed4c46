//! File and folder management: creation, lookup, listing, publishing, content.

pub mod service;
pub mod upload;

pub use service::FileService;
pub use upload::CreateFileRequest;
