//! `SQLite` implementation of the automation flag ports.
//!
//! The flag is a single row of the `automode` table keyed `Auto`. A missing
//! row reads as disabled.

use sqlx::SqlitePool;

use planthub_app::ports::{AutomationAdmin, AutomationMode};
use planthub_domain::error::PlantHubError;

use crate::error::StorageError;

const FLAG_KEY: &str = "Auto";

const SELECT_STATUS: &str = "SELECT status FROM automode WHERE id = ?";
const UPSERT_STATUS: &str = r"
    INSERT INTO automode (id, status) VALUES (?, ?)
    ON CONFLICT (id) DO UPDATE SET status = excluded.status
";

/// `SQLite`-backed automation flag.
#[derive(Clone)]
pub struct SqliteAutomationFlag {
    pool: SqlitePool,
}

impl SqliteAutomationFlag {
    /// Create a new flag accessor using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AutomationMode for SqliteAutomationFlag {
    async fn is_enabled(&self) -> Result<bool, PlantHubError> {
        let status: Option<bool> = sqlx::query_scalar(SELECT_STATUS)
            .bind(FLAG_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(status.unwrap_or(false))
    }
}

impl AutomationAdmin for SqliteAutomationFlag {
    async fn set_enabled(&self, enabled: bool) -> Result<(), PlantHubError> {
        sqlx::query(UPSERT_STATUS)
            .bind(FLAG_KEY)
            .bind(enabled)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        tracing::info!(enabled, "automation flag changed");
        Ok(())
    }
}
