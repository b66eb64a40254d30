//! Sorting options for category queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::SortBy;

/// Fields available for sorting categories.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CategorySortField {
    /// Sort by category name.
    Name,
    /// Sort by the configured display position.
    DisplayOrder,
    /// Sort by creation date.
    #[default]
    CreatedAt,
}

/// Sorting specification for categories.
pub type CategorySort = SortBy<CategorySortField>;
