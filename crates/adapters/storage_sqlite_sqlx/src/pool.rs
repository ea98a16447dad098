//! `SQLite` connection pool setup and migration runner.
//!
//! The workload is a single writer appending audit rows plus a handful of
//! small lookups per cycle, so the pool is kept small and the database runs
//! in WAL mode with `synchronous = NORMAL`.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::error::StorageError;

const MAX_CONNECTIONS: u32 = 4;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:planthub.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Open the pool and run all pending migrations.
    ///
    /// The database file is created when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for an invalid URL, or if the connection or
    /// migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(self.connect_options()?)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(database_url = %self.database_url, "database ready");

        Ok(Database { pool })
    }

    fn connect_options(&self) -> Result<SqliteConnectOptions, StorageError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);
        Ok(options)
    }
}

/// Owns the `SQLite` connection pool.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
        }
    }

    #[tokio::test]
    async fn should_use_normal_synchronous_mode() {
        let db = memory().build().await.unwrap();

        let synchronous: i64 = sqlx::query_scalar("PRAGMA synchronous")
            .fetch_one(db.pool())
            .await
            .unwrap();

        // 1 = NORMAL
        assert_eq!(synchronous, 1);
    }

    #[tokio::test]
    async fn should_fail_when_database_directory_missing() {
        let result = Config {
            database_url: "sqlite:/nonexistent-planthub-dir/planthub.db".to_string(),
        }
        .build()
        .await;

        assert!(matches!(result, Err(StorageError::Database(_))));
    }

    #[tokio::test]
    async fn should_create_pool_and_run_migrations_when_using_memory_db() {
        let db = memory().build().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|row| row.0.as_str()).collect();
        for expected in [
            "area_plant",
            "automode",
            "devices",
            "devices_log",
            "humid_sensor",
            "sensor_log",
        ] {
            assert!(names.contains(&expected), "missing {expected} table");
        }
    }
}
