//! Pagination types for list queries.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Request parameters for paginated queries.
///
/// Pages are zero-based: page `0` is the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-based).
    #[serde(default)]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request. A zero page size is raised to one.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page,
            page_size: page_size.max(1),
        }
    }

    /// Request the given page with the default page size.
    pub fn page(page: u64) -> Self {
        Self::new(page, DEFAULT_PAGE_SIZE)
    }

    /// Number of records to skip.
    pub fn skip(&self) -> u64 {
        self.page.saturating_mul(self.page_size)
    }

    /// Maximum number of records to return.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::page(0)
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
