//! Sorting options for product queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::SortBy;

/// Fields available for sorting products.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductSortField {
    /// Sort by product name.
    Name,
    /// Sort by price.
    Price,
    /// Sort by stock on hand.
    StockQuantity,
    /// Sort by creation date.
    #[default]
    CreatedAt,
    /// Sort by last update.
    UpdatedAt,
}

/// Sorting specification for products.
pub type ProductSort = SortBy<ProductSortField>;
