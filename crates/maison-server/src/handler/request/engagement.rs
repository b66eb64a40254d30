//! Review, contact and newsletter payloads.

use maison_postgres::model::{NewContact, NewReview};
use maison_postgres::types::{ContactStatus, ReviewStatus};
use serde::Deserialize;
use validator::Validate;

/// Request payload for submitting a product review.
#[must_use]
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    /// Reviewer name.
    #[validate(length(min = 2, max = 120))]
    pub customer_name: String,
    /// Star rating, 1 to 5.
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
    /// Review text.
    #[validate(length(min = 1, max = 4000))]
    pub body: String,
}

impl CreateReviewRequest {
    /// Builds the insert payload for the given product.
    ///
    /// Reviews always enter moderation as pending regardless of the
    /// payload.
    pub fn into_new_review(self, product_id: i64) -> NewReview {
        NewReview {
            product_id,
            customer_name: self.customer_name,
            rating: self.rating,
            body: self.body,
            status: None,
        }
    }
}

/// Request payload for a review moderation decision.
#[must_use]
#[derive(Debug, Deserialize)]
pub struct UpdateReviewStatusRequest {
    /// Target moderation status.
    pub status: ReviewStatus,
}

/// Request payload for the contact form.
#[must_use]
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactRequest {
    /// Sender name.
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    /// Sender email address.
    #[validate(email)]
    pub email: String,
    /// Optional sender phone number.
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    /// Message body.
    #[validate(length(min = 1, max = 8000))]
    pub message: String,
}

impl From<CreateContactRequest> for NewContact {
    fn from(request: CreateContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            message: request.message,
        }
    }
}

/// Request payload for a contact status transition.
#[must_use]
#[derive(Debug, Deserialize)]
pub struct UpdateContactStatusRequest {
    /// Target processing status.
    pub status: ContactStatus,
}

/// Request payload for newsletter subscribe and unsubscribe.
#[must_use]
#[derive(Debug, Deserialize, Validate)]
pub struct SubscriptionRequest {
    /// Subscriber email address.
    #[validate(email)]
    pub email: String,
}
