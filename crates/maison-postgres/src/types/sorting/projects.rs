//! Sorting options for showroom project queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::SortBy;

/// Fields available for sorting showroom projects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectSortField {
    /// Sort by project title.
    Title,
    /// Sort by creation date.
    #[default]
    CreatedAt,
    /// Sort by last update.
    UpdatedAt,
}

/// Sorting specification for showroom projects.
pub type ProjectSort = SortBy<ProjectSortField>;
