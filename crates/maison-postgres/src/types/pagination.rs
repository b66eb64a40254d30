//! Offset-based pagination for database queries.
//!
//! The admin tables need random page access and a total row count, so
//! every listing in this crate uses offset pagination with a mandatory
//! COUNT over the same predicate.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of items per page.
pub const MAX_LIMIT: i64 = 100;

/// Default number of items per page.
pub const DEFAULT_LIMIT: i64 = 20;

/// Offset-based pagination parameters for database queries.
///
/// Page numbers are 1-indexed; out-of-range inputs are clamped rather
/// than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OffsetPagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl OffsetPagination {
    /// Creates a new pagination instance.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset: offset.max(0),
        }
    }

    /// Creates pagination from a 1-indexed page number and page size.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_LIMIT);
        Self {
            limit: page_size,
            offset: (page - 1) * page_size,
        }
    }

    /// Gets the current page number (1-based).
    pub fn page_number(&self) -> i64 {
        (self.offset / self.limit) + 1
    }

    /// Gets the page size.
    pub fn page_size(&self) -> i64 {
        self.limit
    }
}

impl Default for OffsetPagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Result of an offset-paginated query.
///
/// `total` is the count of rows matching the filter (not the page size
/// and not the full table), produced by a COUNT over the identical
/// predicate as the page SELECT.
#[derive(Debug, Clone)]
pub struct OffsetPage<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Total count of items matching the query (across all pages).
    pub total: i64,
}

impl<T> OffsetPage<T> {
    /// Creates a new offset page.
    pub fn new(items: Vec<T>, total: i64) -> Self {
        Self { items, total }
    }

    /// Creates an empty offset page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Maps the items to a different type.
    pub fn map<U, F>(self, f: F) -> OffsetPage<U>
    where
        F: FnMut(T) -> U,
    {
        OffsetPage {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    /// Returns whether there are more pages after this one.
    pub fn has_more(&self, pagination: &OffsetPagination) -> bool {
        (pagination.offset + self.items.len() as i64) < self.total
    }

    /// Returns the total number of pages.
    pub fn total_pages(&self, pagination: &OffsetPagination) -> i64 {
        (self.total + pagination.limit - 1) / pagination.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_new() {
        let pagination = OffsetPagination::new(25, 100);
        assert_eq!(pagination.limit, 25);
        assert_eq!(pagination.offset, 100);
    }

    #[test]
    fn pagination_bounds_checking() {
        let pagination = OffsetPagination::new(0, 10);
        assert_eq!(pagination.limit, 1);

        let pagination = OffsetPagination::new(500, 10);
        assert_eq!(pagination.limit, MAX_LIMIT);

        let pagination = OffsetPagination::new(10, -5);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn pagination_from_page() {
        let pagination = OffsetPagination::from_page(1, 20);
        assert_eq!(pagination.limit, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = OffsetPagination::from_page(2, 20);
        assert_eq!(pagination.offset, 20);

        let pagination = OffsetPagination::from_page(3, 10);
        assert_eq!(pagination.offset, 20);

        // Non-positive inputs are treated as 1.
        let pagination = OffsetPagination::from_page(0, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = OffsetPagination::from_page(-3, 0);
        assert_eq!(pagination.offset, 0);
        assert_eq!(pagination.limit, 1);
    }

    #[test]
    fn pagination_page_number() {
        let pagination = OffsetPagination::new(20, 0);
        assert_eq!(pagination.page_number(), 1);

        let pagination = OffsetPagination::new(20, 20);
        assert_eq!(pagination.page_number(), 2);

        let pagination = OffsetPagination::new(10, 25);
        assert_eq!(pagination.page_number(), 3);
    }

    #[test]
    fn offset_page_has_more() {
        let pagination = OffsetPagination::new(10, 0);
        let page = OffsetPage::new((1..=10).collect::<Vec<i32>>(), 25);
        assert!(page.has_more(&pagination));

        let page = OffsetPage::new(vec![1, 2, 3, 4, 5], 5);
        assert!(!page.has_more(&pagination));
    }

    #[test]
    fn offset_page_total_pages() {
        let pagination = OffsetPagination::new(10, 0);

        let page: OffsetPage<i32> = OffsetPage::new(vec![], 25);
        assert_eq!(page.total_pages(&pagination), 3);

        let page: OffsetPage<i32> = OffsetPage::new(vec![], 30);
        assert_eq!(page.total_pages(&pagination), 3);

        let page: OffsetPage<i32> = OffsetPage::new(vec![], 31);
        assert_eq!(page.total_pages(&pagination), 4);
    }

    #[test]
    fn offset_page_map() {
        let page = OffsetPage::new(vec![1, 2, 3], 23);
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.total, 23);
    }
}
