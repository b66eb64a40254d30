//! Order status enumeration for order lifecycle management.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the current status of a customer order.
///
/// This enumeration corresponds to the `ORDER_STATUS` PostgreSQL enum and
/// tracks orders from checkout through fulfilment or cancellation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::OrderStatus"]
pub enum OrderStatus {
    /// Order placed, payment not yet confirmed
    #[db_rename = "pending"]
    #[serde(rename = "pending")]
    #[strum(serialize = "pending")]
    #[default]
    Pending,

    /// Payment confirmed, awaiting dispatch
    #[db_rename = "paid"]
    #[serde(rename = "paid")]
    #[strum(serialize = "paid")]
    Paid,

    /// Order handed over to the carrier
    #[db_rename = "shipped"]
    #[serde(rename = "shipped")]
    #[strum(serialize = "shipped")]
    Shipped,

    /// Order received by the customer
    #[db_rename = "delivered"]
    #[serde(rename = "delivered")]
    #[strum(serialize = "delivered")]
    Delivered,

    /// Order canceled before dispatch
    #[db_rename = "canceled"]
    #[serde(rename = "canceled")]
    #[strum(serialize = "canceled")]
    Canceled,
}

impl OrderStatus {
    /// Returns whether the order is still open for fulfilment work.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Paid)
    }

    /// Returns whether the order reached a terminal state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Canceled)
    }

    /// Returns whether a transition to `next` is a valid lifecycle step.
    ///
    /// Orders move forward only (pending → paid → shipped → delivered);
    /// cancellation is allowed from any non-terminal state.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        match (self, next) {
            (OrderStatus::Pending, OrderStatus::Paid)
            | (OrderStatus::Paid, OrderStatus::Shipped)
            | (OrderStatus::Shipped, OrderStatus::Delivered) => true,
            (from, OrderStatus::Canceled) => !from.is_terminal(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_only() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Paid));
        assert!(OrderStatus::Paid.can_transition_to(OrderStatus::Shipped));
        assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::Delivered));

        assert!(!OrderStatus::Paid.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Shipped));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Shipped));
    }

    #[test]
    fn cancellation_from_non_terminal_states() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Canceled));
        assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::Canceled));
        assert!(!OrderStatus::Canceled.can_transition_to(OrderStatus::Canceled));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Canceled));
    }
}
