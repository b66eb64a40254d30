//! Sorting options for database queries.
//!
//! Each entity exposes a closed enum of sortable fields; the repository
//! maps every variant to a column expression through an exhaustive match.
//! The enum is the whitelist: a key that does not parse into a variant
//! can never reach SQL.

mod categories;
mod contacts;
mod orders;
mod products;
mod projects;
mod reviews;
mod subscribers;

pub use categories::{CategorySort, CategorySortField};
pub use contacts::{ContactSort, ContactSortField};
pub use orders::{OrderSort, OrderSortField};
pub use products::{ProductSort, ProductSortField};
pub use projects::{ProjectSort, ProjectSortField};
pub use reviews::{ReviewSort, ReviewSortField};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use subscribers::{SubscriberSort, SubscriberSortField};

/// Sort order direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending order (A-Z, oldest first, smallest first).
    Asc,
    /// Descending order (Z-A, newest first, largest first).
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Generic sort specification with field and order.
///
/// A listing carries a `Vec<SortBy<F>>`; insertion order is significant,
/// the first element is the primary sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SortBy<F> {
    /// The field to sort by.
    pub field: F,
    /// The sort order direction.
    #[serde(default)]
    pub order: SortOrder,
}

impl<F: Default> Default for SortBy<F> {
    fn default() -> Self {
        Self {
            field: F::default(),
            order: SortOrder::default(),
        }
    }
}

impl<F> SortBy<F> {
    /// Creates a new sort specification with the given field and order.
    #[inline]
    pub fn new(field: F, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Creates a new sort specification with ascending order.
    #[inline]
    pub fn asc(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    /// Creates a new sort specification with descending order.
    #[inline]
    pub fn desc(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }

    /// Returns whether the sort order is ascending.
    #[inline]
    pub fn is_asc(&self) -> bool {
        matches!(self.order, SortOrder::Asc)
    }

    /// Returns whether the sort order is descending.
    #[inline]
    pub fn is_desc(&self) -> bool {
        matches!(self.order, SortOrder::Desc)
    }
}
