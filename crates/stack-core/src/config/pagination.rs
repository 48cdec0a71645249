//! Pagination configuration.

use serde::{Deserialize, Serialize};

use crate::types::pagination::MAX_PAGE_SIZE;

/// Pagination display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Default number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PaginationConfig {
    /// Returns the configured page size clamped to the supported range.
    pub fn effective_page_size(&self) -> u64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    25
}
