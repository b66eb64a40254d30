//! Wire representation of handler errors.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error envelope returned by every failing route.
///
/// `name` is a stable machine-readable identifier; `message` is safe for
/// client display. `field` scopes validation and conflict errors to one
/// request field.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// The error name/type identifier
    pub name: &'static str,
    /// User-friendly error message safe for client display
    pub message: Cow<'static, str>,
    /// The request field the error relates to (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,
    /// The resource that the error relates to (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'static, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    pub status: StatusCode,
}

impl ErrorResponse {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    pub const CONFLICT: Self = Self::new(
        "conflict",
        "The request conflicts with the current state of the resource",
        StatusCode::CONFLICT,
    );
    pub const FORBIDDEN: Self = Self::new(
        "forbidden",
        "You don't have permission to access this resource",
        StatusCode::FORBIDDEN,
    );
    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const MISSING_ADMIN_KEY: Self = Self::new(
        "missing_admin_key",
        "Authentication is required to access this resource",
        StatusCode::UNAUTHORIZED,
    );
    pub const NOT_FOUND: Self = Self::new(
        "not_found",
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    pub const TOO_MANY_REQUESTS: Self = Self::new(
        "too_many_requests",
        "Too many requests. Please slow down and try again later",
        StatusCode::TOO_MANY_REQUESTS,
    );
    pub const UNAUTHORIZED: Self = Self::new(
        "unauthorized",
        "Invalid or expired authentication credentials",
        StatusCode::UNAUTHORIZED,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(name: &'static str, message: &'static str, status: StatusCode) -> Self {
        Self {
            name,
            message: Cow::Borrowed(message),
            field: None,
            resource: None,
            status,
        }
    }

    /// Replaces the user-facing message.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Scopes the response to one request field.
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the resource the response relates to.
    pub fn with_resource(mut self, resource: impl Into<Cow<'static, str>>) -> Self {
        self.resource = Some(resource.into());
        self
    }
}

impl Default for ErrorResponse {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_carry_matching_status() {
        assert_eq!(ErrorResponse::BAD_REQUEST.status, StatusCode::BAD_REQUEST);
        assert_eq!(ErrorResponse::NOT_FOUND.status, StatusCode::NOT_FOUND);
        assert_eq!(ErrorResponse::CONFLICT.status, StatusCode::CONFLICT);
    }

    #[test]
    fn field_is_omitted_when_absent() {
        let body = serde_json::to_value(ErrorResponse::NOT_FOUND).unwrap();
        assert!(body.get("field").is_none());
        assert_eq!(body["name"], "not_found");
    }

    #[test]
    fn field_is_serialized_when_present() {
        let response = ErrorResponse::CONFLICT.with_field("slug");
        let body = serde_json::to_value(response).unwrap();
        assert_eq!(body["field"], "slug");
    }
}
