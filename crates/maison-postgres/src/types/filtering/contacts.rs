//! Filtering options for contact message queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ContactStatus;

/// Filter options for contact message listings.
///
/// `search` matches the sender name or email as a case-insensitive
/// substring.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ContactFilter {
    /// Substring match across sender name and email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict to one processing status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
}

impl ContactFilter {
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

    /// Filters by processing status.
    #[inline]
    pub fn with_status(mut self, status: ContactStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns whether any filter is active.
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(|s| s.trim().is_empty()) && self.status.is_none()
    }
}
