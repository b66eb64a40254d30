//! Product model.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use time::OffsetDateTime;

use crate::schema::products;
use crate::types::RoomType;

/// A catalog product as stored in the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    /// Unique product identifier
    pub id: i64,
    /// Category this product belongs to
    pub category_id: i64,
    /// Human-readable product name
    pub name: String,
    /// URL-safe unique identifier
    pub slug: String,
    /// Long-form description
    pub description: String,
    /// Unit price
    pub price: BigDecimal,
    /// Room the product is designed for
    pub room_type: RoomType,
    /// Whether the product can currently be ordered
    pub is_available: bool,
    /// Units in stock
    pub stock_quantity: i32,
    /// Timestamp when the product was created
    pub created_at: OffsetDateTime,
    /// Timestamp when the product was last updated
    pub updated_at: OffsetDateTime,
}

/// Data for creating a new product.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewProduct {
    /// Category this product belongs to
    pub category_id: i64,
    /// Product name
    pub name: String,
    /// URL-safe unique identifier
    pub slug: String,
    /// Long-form description
    pub description: String,
    /// Unit price
    pub price: BigDecimal,
    /// Room the product is designed for
    pub room_type: Option<RoomType>,
    /// Whether the product can be ordered
    pub is_available: Option<bool>,
    /// Units in stock
    pub stock_quantity: Option<i32>,
}

/// Data for updating a product.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateProduct {
    /// Category this product belongs to
    pub category_id: Option<i64>,
    /// Product name
    pub name: Option<String>,
    /// URL-safe unique identifier
    pub slug: Option<String>,
    /// Long-form description
    pub description: Option<String>,
    /// Unit price
    pub price: Option<BigDecimal>,
    /// Room the product is designed for
    pub room_type: Option<RoomType>,
    /// Whether the product can be ordered
    pub is_available: Option<bool>,
    /// Units in stock
    pub stock_quantity: Option<i32>,
    /// Bumped on every update
    pub updated_at: Option<OffsetDateTime>,
}
