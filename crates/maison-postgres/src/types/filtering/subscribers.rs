//! Filtering options for newsletter subscriber queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::SubscriberStatus;

/// Filter options for newsletter subscriber listings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SubscriberFilter {
    /// Substring match on the email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Restrict to one subscription status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriberStatus>,
}

impl SubscriberFilter {
    /// Creates a new empty filter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by an email substring.
    #[inline]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filters by subscription status.
    #[inline]
    pub fn with_status(mut self, status: SubscriberStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns whether any filter is active.
    pub fn is_empty(&self) -> bool {
        self.email.as_deref().is_none_or(|e| e.trim().is_empty()) && self.status.is_none()
    }
}
