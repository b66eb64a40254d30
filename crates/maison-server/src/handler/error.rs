//! HTTP error handling for all route handlers.
//!
//! [`Error`] is the one type handlers fail with, and this module is the
//! single place where domain failures (database errors, constraint
//! violations, validation failures) are mapped to HTTP status codes.
//! Internal details are logged, never serialized to the client.

use std::borrow::Cow;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maison_postgres::PgError;
use maison_postgres::types::{ConstraintCategory, ConstraintViolation};

use crate::handler::response::ErrorResponse;

/// Tracing target for error mapping.
const TRACING_TARGET: &str = "maison_server::handler::error";

/// A specialized [`Result`] type for HTTP handlers.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Enumeration of all error kinds handlers can surface.
///
/// Each variant corresponds to one HTTP status code and error scenario.
#[must_use = "error kinds do nothing unless used to create errors"]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // 4xx Client Errors
    /// 400 Bad Request - Invalid request data
    BadRequest,
    /// 401 Unauthorized - Missing admin key
    MissingAdminKey,
    /// 401 Unauthorized - Invalid credentials
    Unauthorized,
    /// 403 Forbidden - Access denied
    Forbidden,
    /// 404 Not Found - Resource not found
    NotFound,
    /// 409 Conflict - Conflicting resource state
    Conflict,
    /// 429 Too Many Requests - Rate limit exceeded
    TooManyRequests,

    // 5xx Server Errors
    /// 500 Internal Server Error - Unexpected server error
    #[default]
    InternalServerError,
}

impl ErrorKind {
    /// Converts this error kind into a full [`Error`].
    #[inline]
    pub fn into_error(self) -> Error {
        Error::new(self)
    }

    /// Creates an [`Error`] with the specified message.
    #[inline]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Error {
        Error::new(self).with_message(message)
    }

    /// Creates an [`Error`] with the specified context.
    #[inline]
    pub fn with_context(self, context: impl Into<Cow<'static, str>>) -> Error {
        Error::new(self).with_context(context)
    }

    /// Creates an [`Error`] scoped to a request field.
    #[inline]
    pub fn with_field(self, field: impl Into<Cow<'static, str>>) -> Error {
        Error::new(self).with_field(field)
    }

    /// Creates an [`Error`] with the specified resource.
    #[inline]
    pub fn with_resource(self, resource: impl Into<Cow<'static, str>>) -> Error {
        Error::new(self).with_resource(resource)
    }

    /// Returns the HTTP status code for this error kind.
    #[inline]
    pub fn status_code(self) -> StatusCode {
        self.response().status
    }

    /// Returns the wire representation of this error kind.
    #[inline]
    pub fn response(self) -> ErrorResponse {
        match self {
            Self::BadRequest => ErrorResponse::BAD_REQUEST,
            Self::MissingAdminKey => ErrorResponse::MISSING_ADMIN_KEY,
            Self::Unauthorized => ErrorResponse::UNAUTHORIZED,
            Self::Forbidden => ErrorResponse::FORBIDDEN,
            Self::NotFound => ErrorResponse::NOT_FOUND,
            Self::Conflict => ErrorResponse::CONFLICT,
            Self::TooManyRequests => ErrorResponse::TOO_MANY_REQUESTS,
            Self::InternalServerError => ErrorResponse::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.response().name)
    }
}

impl IntoResponse for ErrorKind {
    #[inline]
    fn into_response(self) -> Response {
        self.response().into_response()
    }
}

/// The error type for HTTP handlers.
///
/// Builder methods attach an optional custom message, the request field
/// the error is scoped to (validation and conflicts), the resource it
/// concerns, and internal context that is logged but never serialized.
#[derive(Debug, Clone)]
#[must_use = "errors do nothing unless serialized"]
pub struct Error {
    kind: ErrorKind,
    message: Option<Cow<'static, str>>,
    field: Option<Cow<'static, str>>,
    resource: Option<Cow<'static, str>>,
    context: Option<Cow<'static, str>>,
}

impl Error {
    /// Creates a new [`Error`] with the specified kind.
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            field: None,
            resource: None,
            context: None,
        }
    }

    /// Sets a custom user-facing message.
    #[inline]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: Some(message.into()),
            ..self
        }
    }

    /// Scopes the error to one request field.
    #[inline]
    pub fn with_field(self, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: Some(field.into()),
            ..self
        }
    }

    /// Sets the resource that caused the error.
    #[inline]
    pub fn with_resource(self, resource: impl Into<Cow<'static, str>>) -> Self {
        Self {
            resource: Some(resource.into()),
            ..self
        }
    }

    /// Attaches internal context; logged server-side, never sent to the
    /// client.
    #[inline]
    pub fn with_context(self, context: impl Into<Cow<'static, str>>) -> Self {
        Self {
            context: Some(context.into()),
            ..self
        }
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the custom message if present.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the scoped field if present.
    #[inline]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl Default for Error {
    #[inline]
    fn default() -> Self {
        Self::new(ErrorKind::default())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.kind.response();
        let message = self.message.as_deref().unwrap_or(&response.message);
        write!(f, "{} ({}): {}", response.name, response.status, message)?;
        if let Some(field) = &self.field {
            write!(f, " [field: {field}]")?;
        }
        if let Some(resource) = &self.resource {
            write!(f, " [resource: {resource}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Some(context) = &self.context {
            tracing::debug!(
                target: TRACING_TARGET,
                kind = %self.kind,
                context = %context,
                "request failed",
            );
        }

        let mut response = self.kind.response();
        if let Some(message) = self.message {
            response = response.with_message(message);
        }
        if let Some(field) = self.field {
            response = response.with_field(field);
        }
        if let Some(resource) = self.resource {
            response = response.with_resource(resource);
        }
        response.into_response()
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<ConstraintViolation> for Error {
    fn from(constraint: ConstraintViolation) -> Self {
        use maison_postgres::types::{
            CategoryConstraints, ContactConstraints, OrderConstraints, OrderItemConstraints,
            ProductConstraints, ProjectConstraints, ReviewConstraints, SubscriberConstraints,
        };

        let kind = match constraint.categorize() {
            ConstraintCategory::Uniqueness => ErrorKind::Conflict,
            ConstraintCategory::Validation | ConstraintCategory::Reference => {
                ErrorKind::BadRequest
            }
        };
        let error = kind.into_error().with_resource(constraint.table_name());

        match constraint {
            ConstraintViolation::Category(CategoryConstraints::SlugUnique)
            | ConstraintViolation::Product(ProductConstraints::SlugUnique)
            | ConstraintViolation::Project(ProjectConstraints::SlugUnique) => error
                .with_field("slug")
                .with_message("This slug is already in use"),
            ConstraintViolation::Subscriber(SubscriberConstraints::EmailUnique) => error
                .with_field("email")
                .with_message("This email address is already subscribed"),
            ConstraintViolation::Order(OrderConstraints::OrderNumberUnique) => error
                .with_field("order_number")
                .with_message("This order number is already in use"),
            ConstraintViolation::Category(CategoryConstraints::SlugFormat)
            | ConstraintViolation::Product(ProductConstraints::SlugFormat)
            | ConstraintViolation::Project(ProjectConstraints::SlugFormat) => error
                .with_field("slug")
                .with_message("Slugs may only contain lowercase letters, digits and dashes"),
            ConstraintViolation::Category(CategoryConstraints::NameLength)
            | ConstraintViolation::Product(ProductConstraints::NameLength) => error
                .with_field("name")
                .with_message("Name length is out of range"),
            ConstraintViolation::Project(ProjectConstraints::TitleLength) => error
                .with_field("title")
                .with_message("Title length is out of range"),
            ConstraintViolation::Category(CategoryConstraints::DisplayOrderMin) => error
                .with_field("display_order")
                .with_message("Display order must not be negative"),
            ConstraintViolation::Product(ProductConstraints::PriceNonNegative) => error
                .with_field("price")
                .with_message("Price must not be negative"),
            ConstraintViolation::Product(ProductConstraints::StockQuantityNonNegative) => error
                .with_field("stock_quantity")
                .with_message("Stock quantity must not be negative"),
            ConstraintViolation::Product(ProductConstraints::CategoryReference) => error
                .with_field("category_id")
                .with_message("The referenced category does not exist"),
            ConstraintViolation::Order(OrderConstraints::CustomerEmailFormat)
            | ConstraintViolation::Contact(ContactConstraints::EmailFormat)
            | ConstraintViolation::Subscriber(SubscriberConstraints::EmailFormat) => error
                .with_field("email")
                .with_message("The email address is not valid"),
            ConstraintViolation::Order(OrderConstraints::TotalAmountNonNegative) => error
                .with_field("total_amount")
                .with_message("Order total must not be negative"),
            ConstraintViolation::OrderItem(OrderItemConstraints::QuantityPositive) => error
                .with_field("quantity")
                .with_message("Quantities must be positive"),
            ConstraintViolation::OrderItem(OrderItemConstraints::UnitPriceNonNegative) => error
                .with_field("unit_price")
                .with_message("Unit prices must not be negative"),
            ConstraintViolation::OrderItem(OrderItemConstraints::OrderReference)
            | ConstraintViolation::OrderItem(OrderItemConstraints::ProductReference) => error
                .with_field("product_id")
                .with_message("The referenced product does not exist"),
            ConstraintViolation::Review(ReviewConstraints::RatingRange) => error
                .with_field("rating")
                .with_message("Ratings must be between 1 and 5"),
            ConstraintViolation::Review(ReviewConstraints::BodyLength) => error
                .with_field("body")
                .with_message("Review text length is out of range"),
            ConstraintViolation::Review(ReviewConstraints::ProductReference) => error
                .with_field("product_id")
                .with_message("The referenced product does not exist"),
            ConstraintViolation::Contact(ContactConstraints::MessageLength) => error
                .with_field("message")
                .with_message("Message length is out of range"),
        }
    }
}

impl From<PgError> for Error {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Query(ref query_error) => {
                if let Some(constraint) = error.constraint_violation() {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        constraint = ?constraint,
                        "query failed with constraint violation",
                    );
                    return constraint.into();
                }

                if error.is_not_found() {
                    return ErrorKind::NotFound.into_error();
                }

                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Config(_)
            | PgError::Timeout(_)
            | PgError::Connection(_)
            | PgError::Migration(_)
            | PgError::Unexpected(_) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    "database failure",
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|field| field.to_string());

        let error = ErrorKind::BadRequest
            .with_message("The request payload failed validation")
            .with_context(errors.to_string());

        match field {
            Some(field) => error.with_field(field),
            None => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_builder_chaining() {
        let error = ErrorKind::NotFound
            .with_message("Product not found")
            .with_resource("products")
            .with_context("id: 42");

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.message(), Some("Product not found"));
        let _ = error.into_response();
    }

    #[test]
    fn unique_slug_maps_to_field_scoped_conflict() {
        let violation = ConstraintViolation::new("products_slug_unique_idx").unwrap();
        let error = Error::from(violation);

        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.field(), Some("slug"));
    }

    #[test]
    fn rating_range_maps_to_bad_request() {
        let violation = ConstraintViolation::new("reviews_rating_range").unwrap();
        let error = Error::from(violation);

        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.field(), Some("rating"));
    }

    #[test]
    fn missing_target_row_maps_to_404() {
        use maison_postgres::error::DieselError;

        let error = Error::from(PgError::Query(DieselError::NotFound));
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn status_codes_follow_kinds() {
        assert_eq!(ErrorKind::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorKind::MissingAdminKey.status_code(),
            StatusCode::UNAUTHORIZED,
        );
        assert_eq!(ErrorKind::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorKind::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorKind::TooManyRequests.status_code(),
            StatusCode::TOO_MANY_REQUESTS,
        );
    }

    #[test]
    fn display_includes_field_scope() {
        let error = ErrorKind::Conflict.with_field("slug").with_message("taken");
        let rendered = error.to_string();
        assert!(rendered.contains("conflict"));
        assert!(rendered.contains("slug"));
    }
}
