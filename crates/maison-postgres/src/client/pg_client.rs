use std::sync::Arc;
use std::time::Duration;

use deadpool::managed::Pool;
use diesel_async::RunQueryDsl;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;

use crate::{
    ConnectionPool, PgConfig, PgError, PgResult, PooledConnection, TRACING_TARGET_CONNECTION,
};

/// Connection pool status information.
#[derive(Debug, Clone)]
pub struct PgPoolStatus {
    /// Maximum number of connections in the pool
    pub max_size: usize,
    /// Current number of connections in the pool
    pub size: usize,
    /// Number of available connections
    pub available: usize,
    /// Number of requests waiting for connections
    pub waiting: usize,
}

impl PgPoolStatus {
    /// Returns the utilization percentage of the pool (0.0 to 1.0).
    #[inline]
    pub fn utilization(&self) -> f64 {
        if self.max_size == 0 {
            0.0
        } else {
            (self.size - self.available) as f64 / self.max_size as f64
        }
    }

    /// Returns whether the pool is under pressure (high utilization or waiting requests).
    #[inline]
    pub fn is_under_pressure(&self) -> bool {
        self.waiting > 0 || self.utilization() > 0.8
    }
}

/// High-level database client that manages connections and migrations.
///
/// This struct provides the main interface for database operations,
/// encapsulating connection pool management and configuration.
#[derive(Clone)]
pub struct PgClient {
    inner: Arc<PgClientInner>,
}

/// Inner data for [`PgClient`].
struct PgClientInner {
    pool: ConnectionPool,
    config: PgConfig,
}

impl PgClient {
    /// Creates a new database client with the provided configuration.
    ///
    /// This builds the connection pool without connecting; connections are
    /// established lazily on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool configuration is invalid.
    #[tracing::instrument(
        skip(config),
        target = TRACING_TARGET_CONNECTION,
        fields(database_url = %config.database_url_masked())
    )]
    pub fn new(config: PgConfig) -> PgResult<Self> {
        tracing::info!(target: TRACING_TARGET_CONNECTION, "Initializing database client");

        config.validate()?;
        let manager = AsyncDieselConnectionManager::new(&config.postgres_url);

        let pool = Pool::builder(manager)
            .max_size(config.postgres_max_connections as usize)
            .wait_timeout(config.connection_timeout())
            .create_timeout(config.connection_timeout())
            .recycle_timeout(config.idle_timeout())
            .runtime(deadpool::Runtime::Tokio1)
            .build()
            .map_err(|e| {
                tracing::error!(
                    target: TRACING_TARGET_CONNECTION,
                    error = %e,
                    "Failed to create connection pool"
                );
                PgError::Unexpected(format!("Failed to build connection pool: {}", e).into())
            })?;

        Ok(Self {
            inner: Arc::new(PgClientInner { pool, config }),
        })
    }

    /// Creates a new database client and verifies connectivity.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be built or the connectivity
    /// test fails.
    #[tracing::instrument(
        skip(config),
        target = TRACING_TARGET_CONNECTION,
        fields(database_url = %config.database_url_masked())
    )]
    pub async fn new_with_test(config: PgConfig) -> PgResult<Self> {
        let this = Self::new(config)?;

        tracing::debug!(target: TRACING_TARGET_CONNECTION, "Testing database connectivity");
        this.ping().await.inspect_err(|e| {
            tracing::error!(
                target: TRACING_TARGET_CONNECTION,
                error = %e,
                "Database connectivity test failed"
            );
        })?;

        tracing::info!(
            target: TRACING_TARGET_CONNECTION,
            max_connections = this.inner.config.postgres_max_connections,
            "Database client initialized successfully"
        );

        Ok(this)
    }

    /// Gets a connection from the pool.
    ///
    /// Waits up to the configured timeout for an available connection.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available within the timeout
    /// period.
    #[tracing::instrument(skip(self), target = TRACING_TARGET_CONNECTION)]
    pub async fn get_connection(&self) -> PgResult<PooledConnection> {
        let start = std::time::Instant::now();
        let conn = self.inner.pool.get().await.map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET_CONNECTION,
                error = %e,
                elapsed = ?start.elapsed(),
                "Failed to acquire connection from pool"
            );
            PgError::from(e)
        })?;

        let elapsed = start.elapsed();
        if elapsed > Duration::from_millis(100) {
            tracing::warn!(
                target: TRACING_TARGET_CONNECTION,
                elapsed = ?elapsed,
                "Connection acquisition took longer than expected"
            );
        }

        Ok(conn)
    }

    /// Runs a connectivity probe (`SELECT 1`) on a pooled connection.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the probe
    /// query fails.
    pub async fn ping(&self) -> PgResult<()> {
        #[derive(diesel::QueryableByName)]
        struct Ping {
            #[diesel(sql_type = diesel::sql_types::Integer)]
            #[allow(dead_code)]
            result: i32,
        }

        let mut conn = self.get_connection().await?;
        let _: Ping = diesel::sql_query("SELECT 1 as result")
            .get_result(&mut *conn)
            .await
            .map_err(PgError::from)?;

        Ok(())
    }

    /// Gets the current pool status and statistics.
    #[inline]
    pub fn pool_status(&self) -> PgPoolStatus {
        let status = self.inner.pool.status();
        PgPoolStatus {
            max_size: status.max_size,
            size: status.size,
            available: status.available,
            waiting: status.waiting,
        }
    }

    /// Gets the database configuration used by this client.
    #[inline]
    pub fn config(&self) -> &PgConfig {
        &self.inner.config
    }
}

impl std::fmt::Debug for PgClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pool_status = self.pool_status();
        f.debug_struct("PgClient")
            .field("database_url", &self.inner.config.database_url_masked())
            .field(
                "pool_max_connections",
                &self.inner.config.postgres_max_connections,
            )
            .field("pool_current_size", &pool_status.size)
            .field("pool_available", &pool_status.available)
            .field("pool_waiting", &pool_status.waiting)
            .finish()
    }
}
