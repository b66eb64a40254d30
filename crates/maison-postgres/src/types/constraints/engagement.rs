//! Engagement table constraint violations (reviews, contacts, newsletter).

use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Review table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Display, EnumIter, EnumString)]
pub enum ReviewConstraints {
    #[strum(serialize = "reviews_rating_range")]
    RatingRange,
    #[strum(serialize = "reviews_body_length")]
    BodyLength,
    #[strum(serialize = "reviews_product_id_fkey")]
    ProductReference,
}

impl ReviewConstraints {
    /// Creates a new [`ReviewConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ReviewConstraints::ProductReference => ConstraintCategory::Reference,
            ReviewConstraints::RatingRange | ReviewConstraints::BodyLength => {
                ConstraintCategory::Validation
            }
        }
    }
}

/// Contact table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Display, EnumIter, EnumString)]
pub enum ContactConstraints {
    #[strum(serialize = "contacts_email_format")]
    EmailFormat,
    #[strum(serialize = "contacts_message_length")]
    MessageLength,
}

impl ContactConstraints {
    /// Creates a new [`ContactConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ContactConstraints::EmailFormat | ContactConstraints::MessageLength => {
                ConstraintCategory::Validation
            }
        }
    }
}

/// Newsletter subscriber table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Display, EnumIter, EnumString)]
pub enum SubscriberConstraints {
    #[strum(serialize = "newsletter_subscribers_email_unique_idx")]
    EmailUnique,
    #[strum(serialize = "newsletter_subscribers_email_format")]
    EmailFormat,
}

impl SubscriberConstraints {
    /// Creates a new [`SubscriberConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            SubscriberConstraints::EmailUnique => ConstraintCategory::Uniqueness,
            SubscriberConstraints::EmailFormat => ConstraintCategory::Validation,
        }
    }
}
