//! Sorting options for newsletter subscriber queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::SortBy;

/// Fields available for sorting newsletter subscribers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubscriberSortField {
    /// Sort by email address.
    Email,
    /// Sort by subscription date.
    #[default]
    CreatedAt,
}

/// Sorting specification for newsletter subscribers.
pub type SubscriberSort = SortBy<SubscriberSortField>;
