//! Product review model.

use diesel::prelude::*;
use time::OffsetDateTime;

use crate::schema::reviews;
use crate::types::ReviewStatus;

/// A customer review as stored in the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Review {
    /// Unique review identifier
    pub id: i64,
    /// Product being reviewed
    pub product_id: i64,
    /// Reviewer name
    pub customer_name: String,
    /// Star rating, 1 to 5
    pub rating: i16,
    /// Review text
    pub body: String,
    /// Moderation status
    pub status: ReviewStatus,
    /// Timestamp when the review was submitted
    pub created_at: OffsetDateTime,
    /// Timestamp when the review was last updated
    pub updated_at: OffsetDateTime,
}

/// Data for creating a new review.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewReview {
    /// Product being reviewed
    pub product_id: i64,
    /// Reviewer name
    pub customer_name: String,
    /// Star rating, 1 to 5
    pub rating: i16,
    /// Review text
    pub body: String,
    /// Moderation status (defaults to pending)
    pub status: Option<ReviewStatus>,
}

/// Data for updating a review.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateReview {
    /// Moderation status
    pub status: Option<ReviewStatus>,
    /// Bumped on every update
    pub updated_at: Option<OffsetDateTime>,
}
