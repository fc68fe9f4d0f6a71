//! Embedded schema migrations.
//!
//! The SQL under `backend/migrations` is compiled into the binary and applied
//! once at startup. Diesel records each applied version in
//! `__diesel_schema_migrations`, so restarts only run new steps.

use diesel::sqlite::SqliteConnection;
use diesel::{Connection, connection::SimpleConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use super::pool::CONNECTION_PRAGMAS;

/// Ordered migration list compiled from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database file could not be opened.
    #[error("failed to open database for migrations: {message}")]
    Connection { message: String },
    /// A migration step failed.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
    /// The blocking migration task panicked or was cancelled.
    #[error("migration task failed: {message}")]
    Task { message: String },
}

fn apply_pending(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn =
        SqliteConnection::establish(database_url).map_err(|err| MigrationError::Connection {
            message: err.to_string(),
        })?;
    conn.batch_execute(CONNECTION_PRAGMAS)
        .map_err(|err| MigrationError::Connection {
            message: err.to_string(),
        })?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.iter().map(ToString::to_string).collect())
}

/// Apply every pending migration and return the versions that ran.
///
/// Runs on the blocking thread pool because migrations use a synchronous
/// connection.
pub async fn run_pending_migrations(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || apply_pending(&url))
        .await
        .map_err(|err| MigrationError::Task {
            message: err.to_string(),
        })??;

    for version in &applied {
        info!(version = %version, "applied migration");
    }
    if applied.is_empty() {
        info!("schema up to date");
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn applies_every_step_once() {
        let dir = tempfile::tempdir().expect("temp dir");
        let url = dir.path().join("hostel.db").display().to_string();

        let first = run_pending_migrations(&url).await.expect("first run");
        assert_eq!(first.len(), 6);
        assert!(first.windows(2).all(|pair| pair[0] < pair[1]));

        let second = run_pending_migrations(&url).await.expect("second run");
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn unreadable_location_is_a_connection_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let url = dir
            .path()
            .join("missing")
            .join("hostel.db")
            .display()
            .to_string();

        let err = run_pending_migrations(&url)
            .await
            .expect_err("parent directory does not exist");
        assert!(matches!(err, MigrationError::Connection { .. }));
    }
}
