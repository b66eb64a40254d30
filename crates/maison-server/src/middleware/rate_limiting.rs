//! IP-based rate limiting middleware.
//!
//! Applied to the public write endpoints (contact form, newsletter,
//! checkout, review submission) to blunt abuse and scripted spam.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_client_ip::ClientIp;

use crate::service::{RateLimitKey, RateLimiter};

/// Rate limits requests by client IP address.
pub async fn rate_limit_by_ip(
    ClientIp(ip_address): ClientIp,
    State(rate_limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let key = RateLimitKey::from_ip(ip_address);

    match rate_limiter.check(key).await {
        Ok(()) => next.run(request).await,
        Err(error) => error.into_response(),
    }
}

/// Rate limits requests by client IP address with strict limits.
///
/// Use this for endpoints that create rows from anonymous input, such
/// as the contact form.
pub async fn rate_limit_strict(
    ClientIp(ip_address): ClientIp,
    State(rate_limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let key = RateLimitKey::from_ip(ip_address);

    // Cost of 4 tokens: 5 requests exhaust the default 20-token window.
    match rate_limiter.check_with_cost(key, 4).await {
        Ok(()) => next.run(request).await,
        Err(error) => error.into_response(),
    }
}
