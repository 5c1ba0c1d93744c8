//! Paging Policy
//!
//! Window-offset arithmetic for the two pagination behaviors.

use serde::{Deserialize, Serialize};

/// How the window moves past the ends of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PagingPolicy {
    /// Stops at the first and last window
    #[default]
    Clamped,
    /// Wraps around to the other end
    Circular,
}

impl PagingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PagingPolicy::Clamped => "clamped",
            PagingPolicy::Circular => "circular",
        }
    }

    /// Offset after moving forward one page
    pub fn next_offset(&self, offset: usize, page_size: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            PagingPolicy::Clamped => {
                let next = offset.saturating_add(page_size);
                if next < len { next } else { offset }
            }
            PagingPolicy::Circular => (offset % len + page_size % len) % len,
        }
    }

    /// Offset after moving back one page
    pub fn prev_offset(&self, offset: usize, page_size: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            PagingPolicy::Clamped => offset.saturating_sub(page_size),
            // page_size may exceed len, so reduce before adding len back
            PagingPolicy::Circular => (offset % len + len - page_size % len) % len,
        }
    }

    pub fn can_advance(&self, offset: usize, page_size: usize, len: usize) -> bool {
        match self {
            PagingPolicy::Clamped => offset.saturating_add(page_size) < len,
            PagingPolicy::Circular => len > 0,
        }
    }

    pub fn can_retreat(&self, offset: usize, len: usize) -> bool {
        match self {
            PagingPolicy::Clamped => offset > 0,
            PagingPolicy::Circular => len > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_stops_on_last_window() {
        let p = PagingPolicy::Clamped;
        assert_eq!(p.next_offset(0, 5, 51), 5);
        assert_eq!(p.next_offset(45, 5, 51), 50);
        assert_eq!(p.next_offset(50, 5, 51), 50);
        assert_eq!(p.prev_offset(3, 5, 51), 0);
        assert_eq!(p.prev_offset(50, 5, 51), 45);
    }

    #[test]
    fn test_circular_wraps() {
        let p = PagingPolicy::Circular;
        assert_eq!(p.next_offset(48, 6, 50), 4);
        assert_eq!(p.prev_offset(4, 6, 50), 48);
        assert_eq!(p.prev_offset(0, 6, 50), 44);
    }

    #[test]
    fn test_circular_page_larger_than_list() {
        let p = PagingPolicy::Circular;
        assert_eq!(p.next_offset(1, 7, 3), 2);
        assert_eq!(p.prev_offset(2, 7, 3), 1);
    }

    #[test]
    fn test_empty_list_is_noop() {
        for p in [PagingPolicy::Clamped, PagingPolicy::Circular] {
            assert_eq!(p.next_offset(0, 5, 0), 0);
            assert_eq!(p.prev_offset(0, 5, 0), 0);
            assert!(!p.can_advance(0, 5, 0));
            assert!(!p.can_retreat(0, 0));
        }
    }

    #[test]
    fn test_boundary_flags() {
        let p = PagingPolicy::Clamped;
        assert!(!p.can_retreat(0, 51));
        assert!(p.can_advance(0, 5, 51));
        assert!(!p.can_advance(50, 5, 51));
        assert!(PagingPolicy::Circular.can_advance(50, 5, 51));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&PagingPolicy::Circular).unwrap(), "\"circular\"");
        assert_eq!(PagingPolicy::Clamped.as_str(), "clamped");
    }
}
