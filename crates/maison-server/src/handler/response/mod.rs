//! Response types for HTTP handlers.

mod catalog;
mod engagement;
mod error_response;
mod orders;

pub use catalog::{CategoryResponse, ProductResponse, ProjectResponse};
pub use engagement::{ContactResponse, ReviewResponse, SubscriberResponse};
pub use error_response::ErrorResponse;
use maison_postgres::types::{OffsetPage, OffsetPagination};
pub use orders::{OrderDetailResponse, OrderItemResponse, OrderResponse, OrderStatsResponse};
use serde::{Deserialize, Serialize};

/// Outcome of a bulk delete.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    /// Number of rows removed.
    pub deleted: u64,
}

/// Generic paginated response wrapper.
///
/// Provides the uniform structure every listing endpoint responds with:
/// the page of items, the filtered total and the 1-indexed page window
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Total count of items matching the filter (across all pages).
    pub total: i64,
    /// 1-indexed page number.
    pub page: i64,
    /// Page size.
    pub limit: i64,
}

impl<T> Page<T> {
    /// Builds the wire page from a repository page and the pagination
    /// that produced it.
    pub fn new(page: OffsetPage<T>, pagination: OffsetPagination) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page: pagination.page_number(),
            limit: pagination.page_size(),
        }
    }

    /// Maps the items to a different type.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_reports_window_from_pagination() {
        let pagination = OffsetPagination::from_page(3, 10);
        let page = Page::new(OffsetPage::new(vec![1, 2, 3], 23), pagination);

        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total, 23);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn serializes_flat_envelope() {
        let pagination = OffsetPagination::from_page(1, 10);
        let page = Page::new(OffsetPage::new(vec![7], 1), pagination);
        let body = serde_json::to_value(page).unwrap();

        assert_eq!(body["items"], serde_json::json!([7]));
        assert_eq!(body["total"], 1);
        assert_eq!(body["page"], 1);
        assert_eq!(body["limit"], 10);
    }
}
