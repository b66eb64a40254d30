//! Order response types.

use bigdecimal::BigDecimal;
use maison_postgres::model::{Order, OrderItem};
use maison_postgres::query::OrderStats;
use maison_postgres::types::OrderStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Represents an order as shown in listings.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    /// ID of the order.
    pub id: i64,
    /// Human-facing order reference.
    pub order_number: String,
    /// Customer full name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Order total.
    pub total_amount: BigDecimal,
    /// Timestamp when the order was placed.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Timestamp when the order was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            status: order.status,
            total_amount: order.total_amount,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// One line of an order.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderItemResponse {
    /// ID of the line.
    pub id: i64,
    /// Product being ordered.
    pub product_id: i64,
    /// Units ordered.
    pub quantity: i32,
    /// Price per unit at checkout time.
    pub unit_price: BigDecimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

/// An order together with its line items and shipping details.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderDetailResponse {
    /// The order.
    #[serde(flatten)]
    pub order: OrderResponse,
    /// Free-form shipping address.
    pub shipping_address: String,
    /// Line items.
    pub items: Vec<OrderItemResponse>,
}

impl OrderDetailResponse {
    /// Builds the detail response from an order and its items.
    pub fn new(order: Order, items: Vec<OrderItem>) -> Self {
        let shipping_address = order.shipping_address.clone();
        Self {
            order: order.into(),
            shipping_address,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Order counts per lifecycle status for the admin dashboard.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderStatsResponse {
    /// Orders awaiting payment.
    pub pending: i64,
    /// Orders paid but not dispatched.
    pub paid: i64,
    /// Orders in transit.
    pub shipped: i64,
    /// Orders delivered.
    pub delivered: i64,
    /// Orders canceled.
    pub canceled: i64,
    /// All orders.
    pub total: i64,
    /// Revenue across delivered orders.
    pub delivered_revenue: BigDecimal,
}

impl OrderStatsResponse {
    /// Builds the dashboard stats from the per-status counts and the
    /// delivered revenue.
    pub fn new(stats: OrderStats, delivered_revenue: BigDecimal) -> Self {
        Self {
            total: stats.total(),
            pending: stats.pending,
            paid: stats.paid,
            shipped: stats.shipped,
            delivered: stats.delivered,
            canceled: stats.canceled,
            delivered_revenue,
        }
    }
}
