//! Admin bearer-key guard.
//!
//! The back-office sits behind one static bearer key. Session issuance
//! and user management live outside this service; the guard only checks
//! that the caller presents the configured key.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::handler::ErrorKind;
use crate::service::AdminKey;

/// Requires a valid `Authorization: Bearer <key>` header.
///
/// Responds 401 when the header is missing or malformed and 403 when
/// the presented key does not match.
pub async fn require_admin_key(
    State(admin_key): State<AdminKey>,
    request: Request,
    next: Next,
) -> Response {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(header_value) = header_value else {
        return ErrorKind::MissingAdminKey.into_response();
    };

    let Some(presented) = header_value.strip_prefix("Bearer ") else {
        return ErrorKind::MissingAdminKey
            .with_message("The Authorization header must use the Bearer scheme")
            .into_response();
    };

    if !admin_key.verify(presented.trim()) {
        return ErrorKind::Forbidden
            .with_message("The provided admin key is not valid")
            .into_response();
    }

    next.run(request).await
}
