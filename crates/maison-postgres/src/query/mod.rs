//! Database query repositories for all entities in the system.
//!
//! Repositories are plain unit structs with async functions that borrow a
//! connection, encapsulating common patterns and providing type-safe
//! interfaces.
//!
//! # Listings
//!
//! Every entity exposes a `list_*` function driven by a
//! [`ListingQuery`]: the page SELECT and the COUNT run over the same
//! predicate, produced by one shared `filtered()` helper per entity so
//! the two cannot drift apart. The read-then-count pair is not wrapped
//! in a transaction; under concurrent writes `items` and `total` can
//! disagree for one response, which is acceptable for a listing UI.
//!
//! [`ListingQuery`]: crate::types::ListingQuery

pub mod categories;
pub mod contacts;
pub mod orders;
pub mod products;
pub mod projects;
pub mod reviews;
pub mod subscribers;

pub use categories::CategoryRepository;
pub use contacts::ContactRepository;
pub use orders::{
    CheckoutCustomer, CheckoutLine, CheckoutOutcome, CheckoutRejection, OrderRepository,
    OrderStats,
};
pub use products::ProductRepository;
pub use projects::ProjectRepository;
pub use reviews::{ReviewRepository, ReviewStats};
pub use subscribers::SubscriberRepository;
