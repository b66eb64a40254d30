//! The generic listing descriptor shared by every entity.
//!
//! A listing request is fully described by pagination, an ordered list
//! of sort instructions and an entity filter. Entities differ only in
//! their sort-field enum `S` and filter struct `F`; the field-to-column
//! mapping lives in the entity's repository as an exhaustive match.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{OffsetPagination, SortBy};

/// A complete listing request for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListingQuery<S, F> {
    /// Page window.
    pub pagination: OffsetPagination,
    /// Multi-column ordering; first element is the primary sort key.
    /// An empty list falls back to the entity's default ordering
    /// (newest first).
    #[serde(default = "Vec::new")]
    pub sort: Vec<SortBy<S>>,
    /// Entity filter; an empty filter matches all rows.
    pub filter: F,
}

impl<S, F: Default> Default for ListingQuery<S, F> {
    fn default() -> Self {
        Self {
            pagination: OffsetPagination::default(),
            sort: Vec::new(),
            filter: F::default(),
        }
    }
}

impl<S, F> ListingQuery<S, F> {
    /// Creates a listing query for the given page with default sorting.
    pub fn new(pagination: OffsetPagination, filter: F) -> Self {
        Self {
            pagination,
            sort: Vec::new(),
            filter,
        }
    }

    /// Replaces the sort instructions.
    pub fn with_sort(mut self, sort: Vec<SortBy<S>>) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProductFilter, ProductSortField, SortOrder};

    #[test]
    fn default_query_has_no_sort_and_empty_filter() {
        let query: ListingQuery<ProductSortField, ProductFilter> = ListingQuery::default();
        assert!(query.sort.is_empty());
        assert!(query.filter.is_empty());
        assert_eq!(query.pagination.offset, 0);
    }

    #[test]
    fn sort_preserves_insertion_order() {
        let query = ListingQuery::new(OffsetPagination::default(), ProductFilter::new())
            .with_sort(vec![
                SortBy::new(ProductSortField::Price, SortOrder::Asc),
                SortBy::new(ProductSortField::Name, SortOrder::Desc),
            ]);
        assert_eq!(query.sort[0].field, ProductSortField::Price);
        assert_eq!(query.sort[1].field, ProductSortField::Name);
    }
}
