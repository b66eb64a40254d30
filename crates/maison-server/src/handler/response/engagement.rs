//! Review, contact and newsletter response types.

use maison_postgres::model::{Contact, Review, Subscriber};
use maison_postgres::types::{ContactStatus, ReviewStatus, SubscriberStatus};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Represents a product review.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// ID of the review.
    pub id: i64,
    /// Product being reviewed.
    pub product_id: i64,
    /// Reviewer name.
    pub customer_name: String,
    /// Star rating, 1 to 5.
    pub rating: i16,
    /// Review text.
    pub body: String,
    /// Moderation status.
    pub status: ReviewStatus,
    /// Timestamp when the review was submitted.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            product_id: review.product_id,
            customer_name: review.customer_name,
            rating: review.rating,
            body: review.body,
            status: review.status,
            created_at: review.created_at,
        }
    }
}

/// Represents an inbound contact message.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    /// ID of the message.
    pub id: i64,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Optional sender phone number.
    pub phone: Option<String>,
    /// Message body.
    pub message: String,
    /// Processing status.
    pub status: ContactStatus,
    /// Timestamp when the message arrived.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            message: contact.message,
            status: contact.status,
            created_at: contact.created_at,
        }
    }
}

/// Represents a newsletter subscriber.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct SubscriberResponse {
    /// ID of the subscriber.
    pub id: i64,
    /// Subscriber email address.
    pub email: String,
    /// Subscription status.
    pub status: SubscriberStatus,
    /// Timestamp of the opt-out, if any.
    #[serde(with = "time::serde::rfc3339::option")]
    pub unsubscribed_at: Option<OffsetDateTime>,
    /// Timestamp when the address first subscribed.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Subscriber> for SubscriberResponse {
    fn from(subscriber: Subscriber) -> Self {
        Self {
            id: subscriber.id,
            email: subscriber.email,
            status: subscriber.status,
            unsubscribed_at: subscriber.unsubscribed_at,
            created_at: subscriber.created_at,
        }
    }
}
