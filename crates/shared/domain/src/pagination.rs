//! Pagination types shared by repositories and the service layer.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use crate::user::User;

/// One page window taken from a full ordered record set, plus the size of that set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T: Clone> PageSlice<T> {
    /// Take the window `[(page - 1) * limit, page * limit)` of `all`.
    ///
    /// Windows past the end are empty. `page` 0 is treated as the first page.
    pub fn window(all: &[T], page: u64, limit: u64) -> Self {
        let start = page.saturating_sub(1).saturating_mul(limit);
        let start = usize::try_from(start).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        Self {
            items: all.iter().skip(start).take(take).cloned().collect(),
            total: all.len() as u64,
        }
    }
}

/// Number of pages needed to show `total` records `limit` at a time.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::ToSchema),
    aliases(PaginatedUsers = Paginated<User>)
)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Shape a repository slice into a response echoing the requested page and limit.
    pub fn new(slice: PageSlice<T>, page: u64, limit: u64) -> Self {
        Self {
            total_pages: total_pages(slice.total, limit),
            data: slice.items,
            total: slice.total,
            page,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_window_slices() {
        let all: Vec<u32> = (0..25).collect();

        let first = PageSlice::window(&all, 1, 10);
        assert_eq!(first.items, (0..10).collect::<Vec<_>>());
        assert_eq!(first.total, 25);

        let last = PageSlice::window(&all, 3, 10);
        assert_eq!(last.items, (20..25).collect::<Vec<_>>());

        let beyond = PageSlice::window(&all, 4, 10);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 25);
    }

    #[test]
    fn test_window_never_exceeds_limit() {
        let all: Vec<u32> = (0..7).collect();
        for page in 1..5 {
            for limit in 1..9 {
                let slice = PageSlice::window(&all, page, limit);
                assert!(slice.items.len() as u64 <= limit);
            }
        }
    }

    #[test]
    fn test_window_page_zero_is_first_page() {
        let all: Vec<u32> = (0..15).collect();

        assert_eq!(PageSlice::window(&all, 0, 10), PageSlice::window(&all, 1, 10));
        assert_eq!(PageSlice::window(&all, 0, 10).items, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_zero_limit_is_empty() {
        let all: Vec<u32> = (0..3).collect();
        let slice = PageSlice::window(&all, 1, 0);

        assert!(slice.items.is_empty());
        assert_eq!(slice.total, 3);
        assert_eq!(total_pages(slice.total, 0), 0);
    }

    #[test]
    fn test_window_huge_page_does_not_overflow() {
        let all = vec![1, 2, 3];
        let slice = PageSlice::window(&all, u64::MAX, u64::MAX);
        assert!(slice.items.is_empty());
        assert_eq!(slice.total, 3);
    }

    #[test]
    fn test_paginated_empty_json() {
        let empty: Vec<u32> = Vec::new();
        let page = Paginated::new(PageSlice::window(&empty, 1, 10), 1, 10);
        let json = serde_json::to_value(page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "data": [], "total": 0, "page": 1, "limit": 10, "totalPages": 0 })
        );
    }
}
