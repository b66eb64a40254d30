//! Order line-item model.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use time::OffsetDateTime;

use crate::schema::order_items;

/// A single line of an order.
///
/// `unit_price` is captured at checkout so later catalog price changes
/// do not rewrite history.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem {
    /// Unique line identifier
    pub id: i64,
    /// Order this line belongs to
    pub order_id: i64,
    /// Product being ordered
    pub product_id: i64,
    /// Units ordered
    pub quantity: i32,
    /// Price per unit at checkout time
    pub unit_price: BigDecimal,
    /// Timestamp when the line was created
    pub created_at: OffsetDateTime,
}

/// Data for creating a new order line.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewOrderItem {
    /// Order this line belongs to
    pub order_id: i64,
    /// Product being ordered
    pub product_id: i64,
    /// Units ordered
    pub quantity: i32,
    /// Price per unit at checkout time
    pub unit_price: BigDecimal,
}
