//! Boat database connections.
//!
//! SQLite serializes writers, so the store keeps one writer connection and a
//! small pool of read-only connections, all in WAL mode so reads never block
//! behind a write. Pool sizing comes from the `[database]` config section.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use boatyard_types::config::DatabaseConfig;

/// Reader pool for `SELECT`s and a single-connection writer pool for mutations.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open `database_url`, apply pending migrations, then open the readers.
    pub async fn connect(database_url: &str, settings: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(settings.busy_timeout_secs))
            .create_if_missing(true);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts.clone())
            .await?;

        // The readers are read-only, so the schema has to exist before they open.
        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(settings.max_readers.max(1))
            .connect_with(opts.read_only(true))
            .await?;

        tracing::debug!(
            url = database_url,
            max_readers = settings.max_readers,
            "boat database ready"
        );

        Ok(Self { reader, writer })
    }
}

/// Default database URL: `{data_dir}/boatyard.db`, created on first use.
pub fn default_database_url(data_dir: &Path) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        data_dir.join("boatyard.db").display()
    )
}
