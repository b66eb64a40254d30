//! Newsletter subscriber status enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Subscription state of a newsletter address.
///
/// Corresponds to the `SUBSCRIBER_STATUS` PostgreSQL enum. Unsubscribed
/// rows are kept (with their timestamp) rather than deleted so a
/// re-subscription reactivates the same row.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::SubscriberStatus"]
pub enum SubscriberStatus {
    /// Address receives the newsletter
    #[db_rename = "subscribed"]
    #[serde(rename = "subscribed")]
    #[strum(serialize = "subscribed")]
    #[default]
    Subscribed,

    /// Address opted out
    #[db_rename = "unsubscribed"]
    #[serde(rename = "unsubscribed")]
    #[strum(serialize = "unsubscribed")]
    Unsubscribed,
}
