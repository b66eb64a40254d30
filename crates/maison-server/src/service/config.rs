//! Application configuration.

#[cfg(feature = "config")]
use clap::Args;
use maison_postgres::{PgClient, PgConfig, PgResult};
use serde::{Deserialize, Serialize};

use crate::service::{AdminKey, RateLimitConfig, RateLimiter};

/// Complete configuration of the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "configurations do nothing unless used to build a state"]
pub struct ServiceConfig {
    /// Database configuration.
    #[serde(flatten)]
    #[cfg_attr(feature = "config", command(flatten))]
    pub postgres: PgConfig,

    /// Bearer key required on every `/admin` route.
    #[cfg_attr(feature = "config", arg(long = "admin-key", env = "MAISON_ADMIN_KEY"))]
    pub admin_key: String,

    /// Requests per minute allowed per client IP on public write routes.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "rate-limit-per-minute",
            env = "MAISON_RATE_LIMIT_PER_MINUTE",
            default_value = "20"
        )
    )]
    pub rate_limit_per_minute: u32,
}

impl ServiceConfig {
    /// Creates a configuration with default rate limits.
    pub fn new(postgres: PgConfig, admin_key: impl Into<String>) -> Self {
        Self {
            postgres,
            admin_key: admin_key.into(),
            rate_limit_per_minute: 20,
        }
    }

    /// Connects the database client.
    pub async fn connect_postgres(&self) -> PgResult<PgClient> {
        PgClient::new_with_test(self.postgres.clone()).await
    }

    /// Builds the admin key verifier.
    pub fn admin_key(&self) -> AdminKey {
        AdminKey::new(&self.admin_key)
    }

    /// Builds the rate limiter for public write routes.
    pub fn rate_limiter(&self) -> RateLimiter {
        RateLimiter::new(RateLimitConfig::per_minute(self.rate_limit_per_minute.max(1)))
    }
}
