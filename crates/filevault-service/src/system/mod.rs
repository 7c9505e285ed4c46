//! Store health and collection statistics.

pub mod service;

pub use service::{SystemService, SystemStats, SystemStatus};
