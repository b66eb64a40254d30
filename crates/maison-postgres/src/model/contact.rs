//! Contact-form message model.

use diesel::prelude::*;
use time::OffsetDateTime;

use crate::schema::contacts;
use crate::types::ContactStatus;

/// An inbound contact message as stored in the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Contact {
    /// Unique message identifier
    pub id: i64,
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Optional sender phone number
    pub phone: Option<String>,
    /// Message body
    pub message: String,
    /// Processing status
    pub status: ContactStatus,
    /// Timestamp when the message arrived
    pub created_at: OffsetDateTime,
    /// Timestamp when the message was last updated
    pub updated_at: OffsetDateTime,
}

/// Data for creating a new contact message.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewContact {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Optional sender phone number
    pub phone: Option<String>,
    /// Message body
    pub message: String,
}

/// Data for updating a contact message.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateContact {
    /// Processing status
    pub status: Option<ContactStatus>,
    /// Bumped on every update
    pub updated_at: Option<OffsetDateTime>,
}
