//! Review status enumeration for moderation workflow.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Moderation state of a customer product review.
///
/// Corresponds to the `REVIEW_STATUS` PostgreSQL enum. Only approved
/// reviews are visible on the storefront.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::ReviewStatus"]
pub enum ReviewStatus {
    /// Submitted, awaiting moderation
    #[db_rename = "pending"]
    #[serde(rename = "pending")]
    #[strum(serialize = "pending")]
    #[default]
    Pending,

    /// Approved and publicly visible
    #[db_rename = "approved"]
    #[serde(rename = "approved")]
    #[strum(serialize = "approved")]
    Approved,

    /// Rejected by a moderator
    #[db_rename = "rejected"]
    #[serde(rename = "rejected")]
    #[strum(serialize = "rejected")]
    Rejected,
}

impl ReviewStatus {
    /// Returns whether the review is visible on the storefront.
    #[inline]
    pub fn is_public(self) -> bool {
        matches!(self, ReviewStatus::Approved)
    }
}
