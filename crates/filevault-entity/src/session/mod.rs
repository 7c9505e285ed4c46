//! Session token value types.

pub mod model;

pub use model::SessionToken;
