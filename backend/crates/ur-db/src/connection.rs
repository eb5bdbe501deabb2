//! Process-wide SQLite pool and schema setup.
//!
//! The server opens one pool at startup and clones it into every request.

use crate::Result as DbErrorResult;

use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const MAX_CONNECTIONS: u32 = 10;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open (creating if missing) the database file at `path`.
pub async fn connect(path: &Path) -> DbErrorResult<SqlitePool> {
    info!("Connecting to database: {}", path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(BUSY_TIMEOUT),
        )
        .await?;

    info!("Database connection established");
    Ok(pool)
}

/// Apply the embedded migrations (creates the `users` table).
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    info!("Migrations complete");
    Ok(())
}
