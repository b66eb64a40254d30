//! Sorting options for review queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::SortBy;

/// Fields available for sorting reviews.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReviewSortField {
    /// Sort by star rating.
    Rating,
    /// Sort by reviewer name.
    CustomerName,
    /// Sort by submission date.
    #[default]
    CreatedAt,
}

/// Sorting specification for reviews.
pub type ReviewSort = SortBy<ReviewSortField>;
