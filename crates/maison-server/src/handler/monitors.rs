//! Health monitoring handlers.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use maison_postgres::PgClient;
use serde::{Deserialize, Serialize};

use crate::extract::Json;
use crate::service::ServiceState;

/// Tracing target for monitoring operations.
const TRACING_TARGET: &str = "maison_server::handler::monitors";

/// Health probe response.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Database reachability.
    pub database: &'static str,
}

/// Liveness and readiness probe.
///
/// Reports degraded (503) when the database cannot be reached.
async fn health(State(pg_client): State<PgClient>) -> (StatusCode, Json<HealthResponse>) {
    match pg_client.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %error,
                "health probe found database unreachable",
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    database: "unreachable",
                }),
            )
        }
    }
}

/// Returns the monitoring routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health))
}
