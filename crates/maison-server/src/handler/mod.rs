//! All [`Router`]s with their related handlers.
//!
//! Public storefront routes and bearer-key guarded `/admin` routes are
//! assembled here; every admin listing speaks the same
//! `page`/`limit`/`sort`/`search` protocol and responds with the same
//! `{items, total, page, limit}` envelope.
//!
//! [`Router`]: axum::Router

mod categories;
mod contacts;
mod error;
mod monitors;
mod newsletter;
mod orders;
mod products;
mod projects;
pub mod request;
pub mod response;
mod reviews;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::middleware::require_admin_key;
use crate::service::ServiceState;

#[inline]
async fn fallback() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with all public storefront routes.
fn public_routes(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .merge(products::routes())
        .merge(categories::routes())
        .merge(projects::routes())
        .merge(orders::routes(state.clone()))
        .merge(reviews::routes(state.clone()))
        .merge(contacts::routes(state.clone()))
        .merge(newsletter::routes(state))
        .merge(monitors::routes())
}

/// Returns a [`Router`] with all admin routes behind the key guard.
fn admin_routes(state: ServiceState) -> Router<ServiceState> {
    let admin_guard = from_fn_with_state(state, require_admin_key);

    Router::new()
        .merge(products::admin_routes())
        .merge(categories::admin_routes())
        .merge(projects::admin_routes())
        .merge(orders::admin_routes())
        .merge(reviews::admin_routes())
        .merge(contacts::admin_routes())
        .merge(newsletter::admin_routes())
        .route_layer(admin_guard)
}

/// Returns a [`Router`] with all routes.
pub fn routes(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .merge(public_routes(state.clone()))
        .nest("/admin", admin_routes(state))
        .fallback(fallback)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use maison_postgres::{PgClient, PgConfig};

    use super::routes;
    use crate::service::{AdminKey, RateLimitConfig, RateLimiter, ServiceState};

    /// State over a lazy pool; no database is contacted unless a
    /// handler actually runs a query.
    fn test_state() -> anyhow::Result<ServiceState> {
        let pg_client = PgClient::new(PgConfig::new("postgresql://localhost/maison_test"))?;
        Ok(ServiceState::from_parts(
            pg_client,
            RateLimiter::new(RateLimitConfig::lenient()),
            AdminKey::new("test-admin-key"),
        ))
    }

    fn test_server() -> anyhow::Result<TestServer> {
        let state = test_state()?;
        let app = routes(state.clone()).with_state(state);
        Ok(TestServer::new(app)?)
    }

    #[tokio::test]
    async fn unknown_route_returns_error_envelope() -> anyhow::Result<()> {
        let server = test_server()?;

        let response = server.get("/definitely-not-a-route").await;
        response.assert_status_not_found();

        let body: serde_json::Value = response.json();
        assert_eq!(body["name"], "not_found");
        Ok(())
    }

    #[tokio::test]
    async fn admin_routes_require_the_key() -> anyhow::Result<()> {
        let server = test_server()?;

        let response = server.get("/admin/products").await;
        response.assert_status_unauthorized();

        let body: serde_json::Value = response.json();
        assert_eq!(body["name"], "missing_admin_key");
        Ok(())
    }

    #[tokio::test]
    async fn wrong_admin_key_is_forbidden() -> anyhow::Result<()> {
        let server = test_server()?;

        let response = server
            .get("/admin/products")
            .authorization_bearer("not-the-key")
            .await;
        response.assert_status_forbidden();
        Ok(())
    }

    #[tokio::test]
    async fn malformed_authorization_scheme_is_unauthorized() -> anyhow::Result<()> {
        let server = test_server()?;

        let response = server
            .get("/admin/orders")
            .authorization("Basic dXNlcjpwYXNz")
            .await;
        response.assert_status_unauthorized();
        Ok(())
    }
}
