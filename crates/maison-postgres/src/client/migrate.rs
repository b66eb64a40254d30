//! Database migration management.
//!
//! Applies the migrations embedded into the binary at build time. The
//! async connection is temporarily wrapped for diesel's synchronous
//! migration harness and driven on a blocking task.

use std::time::Instant;

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Runs all pending migrations on the database.
///
/// Returns the list of applied migration versions.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<Vec<String>> {
    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        "Starting database migration process",
    );

    let start_time = Instant::now();
    let conn = pg.get_connection().await?;

    let mut conn: AsyncConnectionWrapper<_> = conn.into();
    let results = spawn_blocking(move || {
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.into_iter().map(|v| v.to_string()).collect::<Vec<_>>())
    })
    .await;

    let duration = start_time.elapsed();
    let versions = results
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_MIGRATION,
                duration = ?duration,
                error = %err,
                "Migration task panicked, join error occurred"
            );
            PgError::Migration(err.into())
        })?
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_MIGRATION,
                duration = ?duration,
                error = &err,
                "Database migration process failed"
            );
            PgError::Migration(err)
        })?;

    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        duration = ?duration,
        migrations_count = versions.len(),
        "Database migration process completed successfully"
    );

    Ok(versions)
}
