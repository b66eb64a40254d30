//! Showroom project model.
//!
//! Projects are styled room arrangements the studio publishes on the
//! storefront as inspiration pieces.

use diesel::prelude::*;
use time::OffsetDateTime;

use crate::schema::projects;
use crate::types::RoomType;

/// A showroom project as stored in the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Project {
    /// Unique project identifier
    pub id: i64,
    /// Project title
    pub title: String,
    /// URL-safe unique identifier
    pub slug: String,
    /// Long-form description
    pub description: String,
    /// Room the arrangement is designed for
    pub room_type: RoomType,
    /// Whether the project is visible on the storefront
    pub is_published: bool,
    /// Timestamp when the project was created
    pub created_at: OffsetDateTime,
    /// Timestamp when the project was last updated
    pub updated_at: OffsetDateTime,
}

/// Data for creating a new showroom project.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewProject {
    /// Project title
    pub title: String,
    /// URL-safe unique identifier
    pub slug: String,
    /// Long-form description
    pub description: String,
    /// Room the arrangement is designed for
    pub room_type: Option<RoomType>,
    /// Whether the project is visible on the storefront
    pub is_published: Option<bool>,
}

/// Data for updating a showroom project.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateProject {
    /// Project title
    pub title: Option<String>,
    /// URL-safe unique identifier
    pub slug: Option<String>,
    /// Long-form description
    pub description: Option<String>,
    /// Room the arrangement is designed for
    pub room_type: Option<RoomType>,
    /// Whether the project is visible on the storefront
    pub is_published: Option<bool>,
    /// Bumped on every update
    pub updated_at: Option<OffsetDateTime>,
}
