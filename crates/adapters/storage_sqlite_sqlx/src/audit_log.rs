//! `SQLite` implementation of [`AuditLog`].

use sqlx::SqlitePool;

use planthub_app::ports::AuditLog;
use planthub_domain::command::Command;
use planthub_domain::error::PlantHubError;
use planthub_domain::reading::Reading;
use planthub_domain::time;

use crate::error::StorageError;

const INSERT_READING: &str = r"
    INSERT INTO sensor_log (id, sid, temp, humid, time)
    VALUES (?, ?, ?, ?, ?)
";

const INSERT_ACTION: &str = r"
    INSERT INTO devices_log (id, did, action, range_ms, time)
    VALUES (?, ?, ?, ?, ?)
";

/// `SQLite`-backed append-only audit log.
#[derive(Clone)]
pub struct SqliteAuditLog {
    pool: SqlitePool,
}

impl SqliteAuditLog {
    /// Create a new audit log using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AuditLog for SqliteAuditLog {
    async fn record_readings(&self, readings: Vec<Reading>) -> Result<(), PlantHubError> {
        let written_at = time::now().to_rfc3339();
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        for reading in &readings {
            sqlx::query(INSERT_READING)
                .bind(uuid::Uuid::new_v4().to_string())
                .bind(reading.source.as_str())
                .bind(reading.temperature)
                .bind(reading.humidity)
                .bind(&written_at)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
        }

        tx.commit().await.map_err(StorageError::from)?;
        tracing::debug!(count = readings.len(), "sensor readings recorded");
        Ok(())
    }

    async fn record_action(&self, command: &Command) -> Result<(), PlantHubError> {
        let range = i64::try_from(command.duration_ms).unwrap_or(i64::MAX);

        sqlx::query(INSERT_ACTION)
            .bind(uuid::Uuid::new_v4().to_string())
            .bind(command.device.as_str())
            .bind(command.action.as_str())
            .bind(range)
            .bind(time::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use planthub_domain::command::CommandAction;
    use planthub_domain::id::{ActuatorId, SensorId};

    async fn setup() -> (SqliteAuditLog, SqlitePool) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();
        (SqliteAuditLog::new(pool.clone()), pool)
    }

    #[tokio::test]
    async fn should_append_every_reading_of_a_batch() {
        let (log, pool) = setup().await;
        let readings = vec![
            Reading::new(SensorId::new("S1").unwrap(), 22.0, 25.0),
            Reading::new(SensorId::new("S2").unwrap(), 19.5, 61.0),
        ];

        log.record_readings(readings).await.unwrap();

        let rows: Vec<(String, f64, f64)> =
            sqlx::query_as("SELECT sid, temp, humid FROM sensor_log ORDER BY sid")
                .fetch_all(&pool)
                .await
                .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "S1");
        assert!((rows[0].1 - 22.0).abs() < f64::EPSILON);
        assert!((rows[1].2 - 61.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_accept_empty_batch() {
        let (log, pool) = setup().await;
        log.record_readings(Vec::new()).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sensor_log")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn should_append_action_with_timestamp() {
        let (log, pool) = setup().await;
        let command = Command {
            device: ActuatorId::new("D1").unwrap(),
            action: CommandAction::Activate,
            duration_ms: 5000,
        };

        log.record_action(&command).await.unwrap();
        log.record_action(&command).await.unwrap();

        let rows: Vec<(String, String, i64, String)> =
            sqlx::query_as("SELECT did, action, range_ms, time FROM devices_log")
                .fetch_all(&pool)
                .await
                .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "D1");
        assert_eq!(rows[0].1, "activate");
        assert_eq!(rows[0].2, 5000);
        assert!(chrono::DateTime::parse_from_rfc3339(&rows[0].3).is_ok());
    }
}
