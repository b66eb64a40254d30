//! Database models for all entities in the system.
//!
//! Each entity has three shapes: the full row (`Queryable`/`Selectable`),
//! the insert payload (`Insertable`) and the update payload
//! (`AsChangeset`). Update payloads are all-optional so callers only set
//! the columns they intend to change.

mod category;
mod contact;
mod order;
mod order_item;
mod product;
mod project;
mod review;
mod subscriber;

pub use category::{Category, NewCategory, UpdateCategory};
pub use contact::{Contact, NewContact, UpdateContact};
pub use order::{NewOrder, Order, UpdateOrder};
pub use order_item::{NewOrderItem, OrderItem};
pub use product::{NewProduct, Product, UpdateProduct};
pub use project::{NewProject, Project, UpdateProject};
pub use review::{NewReview, Review, UpdateReview};
pub use subscriber::{NewSubscriber, Subscriber, UpdateSubscriber};
