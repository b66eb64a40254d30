//! Sorting options for contact message queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::SortBy;

/// Fields available for sorting contact messages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContactSortField {
    /// Sort by sender name.
    Name,
    /// Sort by sender email.
    Email,
    /// Sort by arrival date.
    #[default]
    CreatedAt,
}

/// Sorting specification for contact messages.
pub type ContactSort = SortBy<ContactSortField>;
