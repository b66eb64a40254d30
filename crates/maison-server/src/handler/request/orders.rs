//! Checkout and order mutation payloads.

use maison_postgres::types::OrderStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One line of a checkout cart.
#[must_use]
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CheckoutItem {
    /// Product being ordered.
    pub product_id: i64,
    /// Units ordered.
    #[validate(range(min = 1, max = 99))]
    pub quantity: i32,
}

/// Request payload for placing an order.
///
/// Prices are not part of the payload; the server reads them from the
/// catalog at checkout time.
#[must_use]
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutRequest {
    /// Customer full name.
    #[validate(length(min = 2, max = 120))]
    pub customer_name: String,
    /// Customer email address.
    #[validate(email)]
    pub customer_email: String,
    /// Free-form shipping address.
    #[validate(length(min = 10, max = 1000))]
    pub shipping_address: String,
    /// Cart lines.
    #[validate(length(min = 1, max = 50), nested)]
    pub items: Vec<CheckoutItem>,
}

/// Request payload for an order status transition.
#[must_use]
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    /// Target lifecycle status.
    pub status: OrderStatus,
}
