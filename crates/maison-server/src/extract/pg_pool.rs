//! PostgreSQL connection extractor for request handlers.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut};
use maison_postgres::{PgClient, PooledConnection};

use crate::handler::{Error, ErrorKind};

/// Extractor that provides a database connection from the pool.
///
/// # Example
///
/// ```rust,ignore
/// use maison_server::extract::PgPool;
///
/// async fn get_product(PgPool(mut conn): PgPool) {
///     // Use conn with the repositories
/// }
/// ```
#[derive(Deref, DerefMut)]
pub struct PgPool(pub PooledConnection);

impl<S> FromRequestParts<S> for PgPool
where
    PgClient: FromRef<S>,
    S: Sync,
{
    type Rejection = Error;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pg_client = PgClient::from_ref(state);
        let conn = pg_client.get_connection().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to acquire database connection");
            ErrorKind::InternalServerError
                .with_message("Database connection unavailable")
                .with_context(e.to_string())
        })?;

        Ok(PgPool(conn))
    }
}
