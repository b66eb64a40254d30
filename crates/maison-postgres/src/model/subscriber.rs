//! Newsletter subscriber model.

use diesel::prelude::*;
use time::OffsetDateTime;

use crate::schema::newsletter_subscribers;
use crate::types::SubscriberStatus;

/// A newsletter subscriber as stored in the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = newsletter_subscribers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Subscriber {
    /// Unique subscriber identifier
    pub id: i64,
    /// Subscriber email address
    pub email: String,
    /// Subscription status
    pub status: SubscriberStatus,
    /// Timestamp of the opt-out, if any
    pub unsubscribed_at: Option<OffsetDateTime>,
    /// Timestamp when the address first subscribed
    pub created_at: OffsetDateTime,
    /// Timestamp when the row was last updated
    pub updated_at: OffsetDateTime,
}

/// Data for creating a new subscriber.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = newsletter_subscribers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewSubscriber {
    /// Subscriber email address
    pub email: String,
    /// Subscription status
    pub status: Option<SubscriberStatus>,
}

/// Data for updating a subscriber.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = newsletter_subscribers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateSubscriber {
    /// Subscription status
    pub status: Option<SubscriberStatus>,
    /// Timestamp of the opt-out
    pub unsubscribed_at: Option<Option<OffsetDateTime>>,
    /// Bumped on every update
    pub updated_at: Option<OffsetDateTime>,
}
