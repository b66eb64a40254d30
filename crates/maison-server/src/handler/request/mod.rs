//! Request types for HTTP handlers.

mod bulk;
mod catalog;
mod engagement;
mod listing;
mod orders;

pub use bulk::BulkDeleteRequest;
pub use catalog::{
    CreateCategoryRequest, CreateProductRequest, CreateProjectRequest, UpdateCategoryRequest,
    UpdateProductRequest, UpdateProjectRequest,
};
pub use engagement::{
    CreateContactRequest, CreateReviewRequest, SubscriptionRequest, UpdateContactStatusRequest,
    UpdateReviewStatusRequest,
};
pub use listing::{
    CategoryListingParams, ContactListingParams, OrderListingParams, ProductListingParams,
    ProjectListingParams, ReviewListingParams, SubscriberListingParams, parse_sort, sentinel,
};
pub use orders::{CheckoutItem, CheckoutRequest, UpdateOrderStatusRequest};
