//! Application state and dependency injection.

use maison_postgres::PgClient;

use crate::service::{AdminKey, RateLimiter, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone, Debug)]
pub struct ServiceState {
    pg_client: PgClient,
    rate_limiter: RateLimiter,
    admin_key: AdminKey,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Connects to the database and builds all shared services.
    pub async fn from_config(config: &ServiceConfig) -> maison_postgres::PgResult<Self> {
        Ok(Self {
            pg_client: config.connect_postgres().await?,
            rate_limiter: config.rate_limiter(),
            admin_key: config.admin_key(),
        })
    }

    /// Builds state from already-constructed parts (tests).
    pub fn from_parts(pg_client: PgClient, rate_limiter: RateLimiter, admin_key: AdminKey) -> Self {
        Self {
            pg_client,
            rate_limiter,
            admin_key,
        }
    }

    /// Returns the database client.
    pub fn pg_client(&self) -> &PgClient {
        &self.pg_client
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+ $(,)?) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
impl_di!(rate_limiter: RateLimiter);
impl_di!(admin_key: AdminKey);
