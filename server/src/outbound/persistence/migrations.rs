//! Embedded schema migrations.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use super::pool::PoolError;

/// Migrations from the `server/migrations` directory.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply all pending migrations to the database at `database_url`.
///
/// Runs on a blocking thread because `diesel_migrations` needs a synchronous
/// connection.
///
/// # Errors
///
/// Returns [`PoolError::Migration`] when the database is unreachable or a
/// migration fails.
pub async fn run_migrations(database_url: &str) -> Result<(), PoolError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url)
            .map_err(|err| PoolError::Migration(format!("connect: {err}")))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.len())
            .map_err(|err| PoolError::Migration(err.to_string()))
    })
    .await
    .map_err(|err| PoolError::Migration(format!("task: {err}")))??;
    info!(applied, "database migrations applied");
    Ok(())
}
