//! Order table constraint violations.

use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Order table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Display, EnumIter, EnumString)]
pub enum OrderConstraints {
    #[strum(serialize = "orders_order_number_unique_idx")]
    OrderNumberUnique,
    #[strum(serialize = "orders_customer_email_format")]
    CustomerEmailFormat,
    #[strum(serialize = "orders_total_amount_nonnegative")]
    TotalAmountNonNegative,
}

impl OrderConstraints {
    /// Creates a new [`OrderConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            OrderConstraints::OrderNumberUnique => ConstraintCategory::Uniqueness,
            OrderConstraints::CustomerEmailFormat
            | OrderConstraints::TotalAmountNonNegative => ConstraintCategory::Validation,
        }
    }
}

/// Order item table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Display, EnumIter, EnumString)]
pub enum OrderItemConstraints {
    #[strum(serialize = "order_items_quantity_positive")]
    QuantityPositive,
    #[strum(serialize = "order_items_unit_price_nonnegative")]
    UnitPriceNonNegative,
    #[strum(serialize = "order_items_order_id_fkey")]
    OrderReference,
    #[strum(serialize = "order_items_product_id_fkey")]
    ProductReference,
}

impl OrderItemConstraints {
    /// Creates a new [`OrderItemConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            OrderItemConstraints::OrderReference | OrderItemConstraints::ProductReference => {
                ConstraintCategory::Reference
            }
            OrderItemConstraints::QuantityPositive
            | OrderItemConstraints::UnitPriceNonNegative => ConstraintCategory::Validation,
        }
    }
}
