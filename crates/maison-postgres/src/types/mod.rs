//! Contains constraints, enumerations and the shared listing machinery.

mod constraints;
mod enums;
mod filtering;
mod listing;
mod pagination;
mod sorting;

pub use constraints::{
    CategoryConstraints, ConstraintCategory, ConstraintViolation, ContactConstraints,
    OrderConstraints, OrderItemConstraints, ProductConstraints, ProjectConstraints,
    ReviewConstraints, SubscriberConstraints,
};
pub use enums::{ContactStatus, OrderStatus, ReviewStatus, RoomType, SubscriberStatus};
pub use filtering::{
    CategoryFilter, ContactFilter, OrderFilter, ProductFilter, ProjectFilter, ReviewFilter,
    SubscriberFilter, like_pattern,
};
pub use listing::ListingQuery;
pub use pagination::{DEFAULT_LIMIT, MAX_LIMIT, OffsetPage, OffsetPagination};
pub use sorting::{
    CategorySort, CategorySortField, ContactSort, ContactSortField, OrderSort, OrderSortField,
    ProductSort, ProductSortField, ProjectSort, ProjectSortField, ReviewSort, ReviewSortField,
    SortBy, SortOrder, SubscriberSort, SubscriberSortField,
};
