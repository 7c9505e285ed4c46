//! File domain entities.

pub mod file_type;
pub mod model;
pub mod parent;

pub use file_type::FileType;
pub use model::FileRecord;
pub use parent::ParentId;
