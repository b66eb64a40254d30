//! Filtering options for review queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ReviewStatus;

/// Filter options for review listings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ReviewFilter {
    /// Substring match on the reviewer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Restrict to reviews of one product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    /// Restrict to one moderation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
}

impl ReviewFilter {
    /// Creates a new empty filter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by a reviewer name substring.
    #[inline]
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Filters by product.
    #[inline]
    pub fn with_product(mut self, product_id: i64) -> Self {
        self.product_id = Some(product_id);
        self
    }

    /// Filters by moderation status.
    #[inline]
    pub fn with_status(mut self, status: ReviewStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns whether any filter is active.
    pub fn is_empty(&self) -> bool {
        self.customer_name
            .as_deref()
            .is_none_or(|n| n.trim().is_empty())
            && self.product_id.is_none()
            && self.status.is_none()
    }
}
