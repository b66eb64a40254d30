//! Database constraint violations organized by functional area.
//!
//! Named check and unique constraints from the schema are parsed into
//! typed violations so the HTTP layer can map a duplicate slug or an
//! out-of-range rating to a field-scoped client error instead of a
//! generic 500.

mod catalog;
mod engagement;
mod orders;

pub use catalog::{CategoryConstraints, ProductConstraints, ProjectConstraints};
pub use engagement::{ContactConstraints, ReviewConstraints, SubscriberConstraints};
pub use orders::{OrderConstraints, OrderItemConstraints};

/// Categories of database constraint violations.
///
/// Classifies violations by their purpose, making it easier to pick an
/// HTTP status for each class of error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintCategory {
    /// Data validation constraints (format, length, range checks).
    Validation,
    /// Uniqueness constraints (unique indexes).
    Uniqueness,
    /// Referential integrity constraints (foreign keys).
    Reference,
}

/// Unified constraint violation enum that can represent any database constraint.
///
/// Wraps the per-table constraint types, providing a single interface for
/// handling any constraint violation while keeping the per-table enums
/// exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Violation on the `categories` table.
    Category(CategoryConstraints),
    /// Violation on the `products` table.
    Product(ProductConstraints),
    /// Violation on the `projects` table.
    Project(ProjectConstraints),
    /// Violation on the `orders` table.
    Order(OrderConstraints),
    /// Violation on the `order_items` table.
    OrderItem(OrderItemConstraints),
    /// Violation on the `reviews` table.
    Review(ReviewConstraints),
    /// Violation on the `contacts` table.
    Contact(ContactConstraints),
    /// Violation on the `newsletter_subscribers` table.
    Subscriber(SubscriberConstraints),
}

impl ConstraintViolation {
    /// Creates a new [`ConstraintViolation`] from the constraint name.
    ///
    /// Returns `None` if the constraint name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use maison_postgres::types::ConstraintViolation;
    ///
    /// let violation = ConstraintViolation::new("products_slug_unique_idx");
    /// assert!(violation.is_some());
    ///
    /// let unknown = ConstraintViolation::new("unknown_constraint");
    /// assert!(unknown.is_none());
    /// ```
    pub fn new(constraint: &str) -> Option<Self> {
        // Route on the table prefix first to avoid parsing every enum.
        if constraint.starts_with("categories_") {
            if let Some(c) = CategoryConstraints::new(constraint) {
                return Some(ConstraintViolation::Category(c));
            }
        } else if constraint.starts_with("products_") {
            if let Some(c) = ProductConstraints::new(constraint) {
                return Some(ConstraintViolation::Product(c));
            }
        } else if constraint.starts_with("projects_") {
            if let Some(c) = ProjectConstraints::new(constraint) {
                return Some(ConstraintViolation::Project(c));
            }
        } else if constraint.starts_with("orders_") {
            if let Some(c) = OrderConstraints::new(constraint) {
                return Some(ConstraintViolation::Order(c));
            }
        } else if constraint.starts_with("order_items_") {
            if let Some(c) = OrderItemConstraints::new(constraint) {
                return Some(ConstraintViolation::OrderItem(c));
            }
        } else if constraint.starts_with("reviews_") {
            if let Some(c) = ReviewConstraints::new(constraint) {
                return Some(ConstraintViolation::Review(c));
            }
        } else if constraint.starts_with("contacts_") {
            if let Some(c) = ContactConstraints::new(constraint) {
                return Some(ConstraintViolation::Contact(c));
            }
        } else if constraint.starts_with("newsletter_subscribers_")
            && let Some(c) = SubscriberConstraints::new(constraint)
        {
            return Some(ConstraintViolation::Subscriber(c));
        }

        None
    }

    /// Returns the table name associated with this constraint.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConstraintViolation::Category(_) => "categories",
            ConstraintViolation::Product(_) => "products",
            ConstraintViolation::Project(_) => "projects",
            ConstraintViolation::Order(_) => "orders",
            ConstraintViolation::OrderItem(_) => "order_items",
            ConstraintViolation::Review(_) => "reviews",
            ConstraintViolation::Contact(_) => "contacts",
            ConstraintViolation::Subscriber(_) => "newsletter_subscribers",
        }
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ConstraintViolation::Category(c) => c.categorize(),
            ConstraintViolation::Product(c) => c.categorize(),
            ConstraintViolation::Project(c) => c.categorize(),
            ConstraintViolation::Order(c) => c.categorize(),
            ConstraintViolation::OrderItem(c) => c.categorize(),
            ConstraintViolation::Review(c) => c.categorize(),
            ConstraintViolation::Contact(c) => c.categorize(),
            ConstraintViolation::Subscriber(c) => c.categorize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_constraints() {
        assert_eq!(
            ConstraintViolation::new("products_slug_unique_idx"),
            Some(ConstraintViolation::Product(
                ProductConstraints::SlugUnique
            )),
        );
        assert_eq!(
            ConstraintViolation::new("newsletter_subscribers_email_unique_idx"),
            Some(ConstraintViolation::Subscriber(
                SubscriberConstraints::EmailUnique
            )),
        );
    }

    #[test]
    fn rejects_unknown_constraints() {
        assert!(ConstraintViolation::new("products_nonexistent").is_none());
        assert!(ConstraintViolation::new("users_email_unique_idx").is_none());
    }

    #[test]
    fn categorizes_uniqueness() {
        let violation = ConstraintViolation::new("categories_slug_unique_idx").unwrap();
        assert_eq!(violation.categorize(), ConstraintCategory::Uniqueness);
        assert_eq!(violation.table_name(), "categories");
    }
}
