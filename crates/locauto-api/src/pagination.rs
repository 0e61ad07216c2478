//! # Pagination
//!
//! Page envelope for paginated list endpoints.
//!
//! The API wraps paginated collections in a standard envelope:
//! ```text
//! {
//!   "data": [ ... ],
//!   "current_page": 1,
//!   "last_page": 4,
//!   "per_page": 12,
//!   "total": 41
//! }
//! ```

use serde::{Deserialize, Serialize};

/// One page of a paginated collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// A single page holding everything (non-paginated endpoints).
    pub fn single(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Page {
            per_page: data.len().max(1) as u32,
            data,
            current_page: 1,
            last_page: 1,
            total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope_decoding() {
        let json = r#"{
            "data": [1, 2, 3],
            "current_page": 2,
            "last_page": 4,
            "per_page": 3,
            "total": 11
        }"#;
        let page: Page<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert!(page.has_next());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page = Page {
            data: vec![1],
            current_page: 4,
            last_page: 4,
            per_page: 3,
            total: 10,
        };
        assert!(!page.has_next());
    }

    #[test]
    fn test_single_page() {
        let page = Page::single(vec!["a", "b"]);
        assert_eq!(page.total, 2);
        assert!(!page.has_next());
    }
}
