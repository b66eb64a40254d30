//! Filtering options for showroom project queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::RoomType;

/// Filter options for showroom project listings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ProjectFilter {
    /// Substring match on the project title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Restrict to one room type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    /// Restrict by publication state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

impl ProjectFilter {
    /// Creates a new empty filter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by a title substring.
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Filters by room type.
    #[inline]
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Filters by publication state.
    #[inline]
    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    /// Returns whether any filter is active.
    pub fn is_empty(&self) -> bool {
        self.title.as_deref().is_none_or(|t| t.trim().is_empty())
            && self.room_type.is_none()
            && self.is_published.is_none()
    }
}
