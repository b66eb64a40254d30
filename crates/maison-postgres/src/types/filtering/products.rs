//! Filtering options for product queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::RoomType;

/// Filter options for product listings.
///
/// `name` is a case-insensitive substring match; the remaining fields
/// are exact matches.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ProductFilter {
    /// Substring match on the product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Restrict to one category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Restrict to one room type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    /// Restrict by availability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl ProductFilter {
    /// Creates a new empty filter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by a name substring.
    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filters by category.
    #[inline]
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Filters by room type.
    #[inline]
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Filters by availability.
    #[inline]
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = Some(is_available);
        self
    }

    /// Returns whether any filter is active.
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().is_none_or(|n| n.trim().is_empty())
            && self.category_id.is_none()
            && self.room_type.is_none()
            && self.is_available.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_is_empty() {
        assert!(ProductFilter::new().is_empty());
    }

    #[test]
    fn whitespace_name_counts_as_empty() {
        assert!(ProductFilter::new().with_name("   ").is_empty());
        assert!(!ProductFilter::new().with_name("sofa").is_empty());
    }

    #[test]
    fn exact_fields_activate_filter() {
        assert!(!ProductFilter::new().with_category(3).is_empty());
        assert!(!ProductFilter::new().with_availability(true).is_empty());
    }
}
