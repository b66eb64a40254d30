//! Filtering options for order queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::OrderStatus;

/// Filter options for order listings.
///
/// `search` matches the order number, customer name or customer email
/// as a case-insensitive substring (any of the three).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OrderFilter {
    /// Substring match across order number, customer name and email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict to one order status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    /// Creates a new empty filter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by a search term.
    #[inline]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filters by order status.
    #[inline]
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns whether any filter is active.
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(|s| s.trim().is_empty()) && self.status.is_none()
    }
}
