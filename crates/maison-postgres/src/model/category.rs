//! Product category model.

use diesel::prelude::*;
use time::OffsetDateTime;

use crate::schema::categories;

/// A product category as stored in the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    /// Unique category identifier
    pub id: i64,
    /// Human-readable category name
    pub name: String,
    /// URL-safe unique identifier
    pub slug: String,
    /// Optional long-form description
    pub description: Option<String>,
    /// Position in storefront navigation (lower sorts first)
    pub display_order: i32,
    /// Timestamp when the category was created
    pub created_at: OffsetDateTime,
    /// Timestamp when the category was last updated
    pub updated_at: OffsetDateTime,
}

/// Data for creating a new category.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewCategory {
    /// Category name
    pub name: String,
    /// URL-safe unique identifier
    pub slug: String,
    /// Optional description
    pub description: Option<String>,
    /// Navigation position
    pub display_order: Option<i32>,
}

/// Data for updating a category.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateCategory {
    /// Category name
    pub name: Option<String>,
    /// URL-safe unique identifier
    pub slug: Option<String>,
    /// Description
    pub description: Option<Option<String>>,
    /// Navigation position
    pub display_order: Option<i32>,
    /// Bumped on every update
    pub updated_at: Option<OffsetDateTime>,
}
