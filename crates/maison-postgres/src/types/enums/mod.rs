//! Database enumeration types for type-safe queries.
//!
//! This module provides strongly-typed enumerations that correspond to
//! PostgreSQL ENUM types defined in the database schema. Each enumeration
//! provides serialization support for APIs and database integration
//! through Diesel.

// Catalog-related enumerations
pub mod room_type;

// Order-related enumerations
pub mod order_status;

// Engagement-related enumerations
pub mod contact_status;
pub mod review_status;
pub mod subscriber_status;

pub use contact_status::ContactStatus;
pub use order_status::OrderStatus;
pub use review_status::ReviewStatus;
pub use room_type::RoomType;
pub use subscriber_status::SubscriberStatus;
