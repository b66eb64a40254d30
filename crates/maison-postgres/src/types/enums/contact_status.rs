//! Contact message status enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Processing state of an inbound contact-form message.
///
/// Corresponds to the `CONTACT_STATUS` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::ContactStatus"]
pub enum ContactStatus {
    /// Message received, nobody has looked at it yet
    #[db_rename = "new"]
    #[serde(rename = "new")]
    #[strum(serialize = "new")]
    #[default]
    New,

    /// Message opened by a staff member
    #[db_rename = "read"]
    #[serde(rename = "read")]
    #[strum(serialize = "read")]
    Read,

    /// A reply has been sent
    #[db_rename = "replied"]
    #[serde(rename = "replied")]
    #[strum(serialize = "replied")]
    Replied,

    /// Archived, no further action needed
    #[db_rename = "archived"]
    #[serde(rename = "archived")]
    #[strum(serialize = "archived")]
    Archived,
}

impl ContactStatus {
    /// Returns whether the message still needs staff attention.
    #[inline]
    pub fn needs_attention(self) -> bool {
        matches!(self, ContactStatus::New | ContactStatus::Read)
    }
}
