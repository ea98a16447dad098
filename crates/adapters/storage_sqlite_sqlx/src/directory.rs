//! `SQLite` implementation of [`AreaDirectory`].
//!
//! Sensors live in `humid_sensor`, actuators in `devices`; both carry the
//! owning `area_id`.

use sqlx::SqlitePool;

use planthub_app::ports::AreaDirectory;
use planthub_domain::error::PlantHubError;
use planthub_domain::id::{ActuatorId, AreaId, DeviceRef};

use crate::error::StorageError;

const SELECT_SENSOR_AREA: &str = "SELECT area_id FROM humid_sensor WHERE id = ?";
const SELECT_ACTUATOR_AREA: &str = "SELECT area_id FROM devices WHERE id = ?";
const SELECT_CONTROLLING_DEVICE: &str =
    "SELECT id FROM devices WHERE area_id = ? ORDER BY id LIMIT 1";

/// `SQLite`-backed area directory.
#[derive(Clone)]
pub struct SqliteAreaDirectory {
    pool: SqlitePool,
}

impl SqliteAreaDirectory {
    /// Create a new directory using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AreaDirectory for SqliteAreaDirectory {
    async fn area_of(&self, device: &DeviceRef) -> Result<Option<AreaId>, PlantHubError> {
        let (query, id) = match device {
            DeviceRef::Sensor(id) => (SELECT_SENSOR_AREA, id.as_str()),
            DeviceRef::Actuator(id) => (SELECT_ACTUATOR_AREA, id.as_str()),
        };

        let area: Option<String> = sqlx::query_scalar(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let area = area
            .map(AreaId::new)
            .transpose()
            .map_err(StorageError::from)?;
        Ok(area)
    }

    async fn controlling_device(&self, area: &AreaId) -> Result<Option<ActuatorId>, PlantHubError> {
        let device: Option<String> = sqlx::query_scalar(SELECT_CONTROLLING_DEVICE)
            .bind(area.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let device = device
            .map(ActuatorId::new)
            .transpose()
            .map_err(StorageError::from)?;
        Ok(device)
    }
}
