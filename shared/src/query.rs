//! List query envelope
//!
//! Shared pagination response for list endpoints.

use serde::{Deserialize, Serialize};

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items on the requested page
    pub items: Vec<T>,
    /// Total matches across all pages (post-filter, pre-slice)
    pub total_count: u64,
    /// Requested page (1-based)
    pub page: u32,
    /// Requested page size
    pub page_size: u32,
    /// ceil(total_count / page_size)
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total_count: u64, page: u32, page_size: u32) -> Self {
        let total_pages = if page_size > 0 {
            total_count.div_ceil(page_size as u64) as u32
        } else {
            0
        };

        Self {
            items,
            total_count,
            page,
            page_size,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_math() {
        let resp = PaginatedResponse::new(vec!["a", "b", "c"], 25, 2, 10);
        assert_eq!(resp.total_count, 25);
        assert_eq!(resp.total_pages, 3);
    }

    #[test]
    fn exact_multiple_has_no_extra_page() {
        let resp: PaginatedResponse<u8> = PaginatedResponse::new(vec![], 30, 4, 10);
        assert_eq!(resp.total_pages, 3);
    }
}
