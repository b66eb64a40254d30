//! Room type enumeration for catalog classification.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the room a product or showroom project is designed for.
///
/// This enumeration corresponds to the `ROOM_TYPE` PostgreSQL enum and is
/// used both as a catalog attribute and as an exact-match listing filter.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::RoomType"]
pub enum RoomType {
    /// Sofas, armchairs, coffee tables
    #[db_rename = "living_room"]
    #[serde(rename = "living_room")]
    #[strum(serialize = "living_room")]
    #[default]
    LivingRoom,

    /// Beds, wardrobes, nightstands
    #[db_rename = "bedroom"]
    #[serde(rename = "bedroom")]
    #[strum(serialize = "bedroom")]
    Bedroom,

    /// Dining tables and chairs
    #[db_rename = "dining"]
    #[serde(rename = "dining")]
    #[strum(serialize = "dining")]
    Dining,

    /// Desks, office chairs, shelving
    #[db_rename = "office"]
    #[serde(rename = "office")]
    #[strum(serialize = "office")]
    Office,

    /// Kitchen islands, stools, storage
    #[db_rename = "kitchen"]
    #[serde(rename = "kitchen")]
    #[strum(serialize = "kitchen")]
    Kitchen,

    /// Garden and patio furniture
    #[db_rename = "outdoor"]
    #[serde(rename = "outdoor")]
    #[strum(serialize = "outdoor")]
    Outdoor,
}
