//! Customer order model.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use time::OffsetDateTime;

use crate::schema::orders;
use crate::types::OrderStatus;

/// A customer order as stored in the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    /// Unique order identifier
    pub id: i64,
    /// Human-facing order reference (e.g. `MSN-7F3K2A`)
    pub order_number: String,
    /// Customer full name
    pub customer_name: String,
    /// Customer email address
    pub customer_email: String,
    /// Free-form shipping address
    pub shipping_address: String,
    /// Current lifecycle status
    pub status: OrderStatus,
    /// Order total, denormalized from its items at checkout
    pub total_amount: BigDecimal,
    /// Timestamp when the order was placed
    pub created_at: OffsetDateTime,
    /// Timestamp when the order was last updated
    pub updated_at: OffsetDateTime,
}

/// Data for creating a new order.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewOrder {
    /// Human-facing order reference
    pub order_number: String,
    /// Customer full name
    pub customer_name: String,
    /// Customer email address
    pub customer_email: String,
    /// Free-form shipping address
    pub shipping_address: String,
    /// Lifecycle status
    pub status: Option<OrderStatus>,
    /// Order total
    pub total_amount: BigDecimal,
}

/// Data for updating an order.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateOrder {
    /// Lifecycle status
    pub status: Option<OrderStatus>,
    /// Free-form shipping address
    pub shipping_address: Option<String>,
    /// Bumped on every update
    pub updated_at: Option<OffsetDateTime>,
}
