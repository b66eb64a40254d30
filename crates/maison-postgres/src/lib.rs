#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Embeds all migrations into the final binary.
pub(crate) const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
    diesel_migrations::embed_migrations!();

// Tracing target constants for consistent logging.

/// Tracing target for client-related operations.
pub const TRACING_TARGET_CLIENT: &str = "maison_postgres::client";

/// Tracing target for database query operations.
pub const TRACING_TARGET_QUERY: &str = "maison_postgres::query";

/// Tracing target for database migration operations.
pub const TRACING_TARGET_MIGRATION: &str = "maison_postgres::migrations";

/// Tracing target for database connection operations.
pub const TRACING_TARGET_CONNECTION: &str = "maison_postgres::connection";

mod client;
pub mod model;
pub mod query;
mod schema;
pub mod types;

use std::borrow::Cow;

use deadpool::managed::TimeoutType;
use diesel::ConnectionError;
use diesel::result::Error;
pub use diesel_async::AsyncPgConnection as PgConnection;

pub use crate::client::{
    ConnectionPool, PgClient, PgConfig, PgPoolStatus, PooledConnection, run_pending_migrations,
};
use crate::types::ConstraintViolation;

pub mod error {
    //! Error types and utilities for database operations.
    //!
    //! See [`PgError`] for the main error type used throughout this crate.
    //!
    //! [`PgError`]: crate::PgError

    /// Type-erased error type for dynamic error handling.
    pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

    use std::borrow::Cow;

    pub use deadpool::managed::TimeoutType;
    pub use diesel::result::{ConnectionError as DieselConnectionError, Error as DieselError};
    pub use diesel_async::pooled_connection::PoolError as DieselPoolError;
    pub use diesel_async::pooled_connection::deadpool::PoolError as DeadpoolError;

    /// Provides contextual hints for error types to aid in debugging and user messaging.
    pub trait ErrorHint {
        /// Returns an additional hint for an error type.
        fn hint(&self) -> Cow<'static, str>;
    }

    impl ErrorHint for TimeoutType {
        fn hint(&self) -> Cow<'static, str> {
            match self {
                TimeoutType::Wait => Cow::Borrowed(
                    "Connection pool is exhausted, consider increasing pool size or optimizing query performance",
                ),
                TimeoutType::Create => Cow::Borrowed(
                    "Unable to establish new database connection, check connection string and database availability",
                ),
                TimeoutType::Recycle => Cow::Borrowed(
                    "Failed to recycle database connection, connection may be in invalid state",
                ),
            }
        }
    }
}

/// Comprehensive error type for all PostgreSQL database operations.
///
/// Covers connection issues, query failures, timeouts and migration
/// problems. Listing and mutation repositories surface everything through
/// this type; the HTTP layer decides how each case maps to a status code.
#[derive(Debug, thiserror::Error)]
#[must_use = "database errors should be handled appropriately"]
pub enum PgError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database operation timed out.
    ///
    /// This can occur during connection creation, waiting for available
    /// connections, or connection recycling operations.
    #[error("Database operation timed out")]
    Timeout(TimeoutType),

    /// Failed to establish or maintain a database connection.
    #[error("Database connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Database migration operation failed.
    #[error("Database migration error: {0}")]
    Migration(error::BoxError),

    /// Database query execution failed.
    ///
    /// This includes SQL syntax errors, constraint violations, type
    /// mismatches, and other query-related failures.
    #[error("Database query error: {0}")]
    Query(#[from] Error),

    /// Unexpected error occurred.
    #[error("Unexpected error: {0}")]
    Unexpected(Cow<'static, str>),
}

impl PgError {
    /// Extracts the constraint name from a constraint violation error.
    ///
    /// # Returns
    ///
    /// - `Some(constraint_name)` if this error represents a constraint violation
    /// - `None` if this error is not related to a constraint violation
    pub fn constraint(&self) -> Option<&str> {
        let PgError::Query(err) = self else {
            return None;
        };

        let Error::DatabaseError(_, err) = err else {
            return None;
        };

        err.constraint_name()
    }

    /// Returns a structured constraint violation if this error represents one.
    ///
    /// This provides a more structured way to handle known constraint
    /// violations using the [`ConstraintViolation`] enum.
    pub fn constraint_violation(&self) -> Option<ConstraintViolation> {
        self.constraint().and_then(ConstraintViolation::new)
    }

    /// Returns whether this error is a "no rows matched" query failure.
    ///
    /// Mutation queries that use `RETURNING` surface a missing target
    /// row this way; HTTP callers usually map it to a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PgError::Query(Error::NotFound))
    }

    /// Returns whether this error indicates a transient failure that might succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PgError::Timeout(_) | PgError::Connection(ConnectionError::BadConnection(_))
        )
    }

    /// Returns whether this error indicates a permanent failure that won't succeed on retry.
    pub fn is_permanent(&self) -> bool {
        !self.is_transient()
    }
}

impl From<error::DeadpoolError> for PgError {
    fn from(value: error::DeadpoolError) -> Self {
        use error::{DeadpoolError, DieselPoolError};

        match value {
            DeadpoolError::Timeout(timeout) => Self::Timeout(timeout),
            DeadpoolError::Backend(DieselPoolError::QueryError(error)) => Self::Query(error),
            DeadpoolError::Backend(DieselPoolError::ConnectionError(error)) => {
                Self::Connection(error)
            }
            DeadpoolError::PostCreateHook(err) => {
                tracing::warn!("Unexpected post-create hook error: {}", err);
                Self::Unexpected(err.to_string().into())
            }
            DeadpoolError::NoRuntimeSpecified => {
                tracing::error!("No tokio runtime specified for connection pool");
                Self::Unexpected("No runtime specified".into())
            }
            DeadpoolError::Closed => Self::Connection(ConnectionError::InvalidConnectionUrl(
                "Connection pool is closed".into(),
            )),
        }
    }
}

/// Specialized [`Result`] type for database operations.
pub type PgResult<T, E = PgError> = Result<T, E>;
