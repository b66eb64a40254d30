//! Sorting options for order queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::SortBy;

/// Fields available for sorting orders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderSortField {
    /// Sort by order number.
    OrderNumber,
    /// Sort by customer name.
    CustomerName,
    /// Sort by order total.
    TotalAmount,
    /// Sort by placement date.
    #[default]
    CreatedAt,
}

/// Sorting specification for orders.
pub type OrderSort = SortBy<OrderSortField>;
