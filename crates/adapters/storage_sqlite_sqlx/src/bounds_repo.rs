//! `SQLite` implementation of [`BoundsProvider`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use planthub_app::ports::BoundsProvider;
use planthub_domain::bounds::Bounds;
use planthub_domain::error::PlantHubError;
use planthub_domain::id::AreaId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Bounds`].
struct Wrapper(Bounds);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let bounds = Bounds {
            upper_temperature: row.try_get("upper_temperature")?,
            lower_temperature: row.try_get("lower_temperature")?,
            upper_humidity: row.try_get("upper_humidity")?,
            lower_humidity: row.try_get("lower_humidity")?,
        };
        bounds
            .validate()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        Ok(Self(bounds))
    }
}

const SELECT_BY_AREA: &str = "SELECT * FROM area_plant WHERE id = ?";
const UPSERT: &str = r"
    INSERT INTO area_plant (id, upper_humidity, lower_humidity, upper_temperature, lower_temperature)
    VALUES (?, ?, ?, ?, ?)
    ON CONFLICT (id) DO UPDATE SET
        upper_humidity = excluded.upper_humidity,
        lower_humidity = excluded.lower_humidity,
        upper_temperature = excluded.upper_temperature,
        lower_temperature = excluded.lower_temperature
";

/// `SQLite`-backed per-area thresholds.
#[derive(Clone)]
pub struct SqliteBoundsRepository {
    pool: SqlitePool,
}

impl SqliteBoundsRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create or replace the bounds of an area.
    ///
    /// # Errors
    ///
    /// Returns [`PlantHubError::Validation`] for inverted bounds, or a
    /// storage error if the write fails.
    pub async fn save(&self, area: &AreaId, bounds: Bounds) -> Result<(), PlantHubError> {
        bounds.validate()?;
        sqlx::query(UPSERT)
            .bind(area.as_str())
            .bind(bounds.upper_humidity)
            .bind(bounds.lower_humidity)
            .bind(bounds.upper_temperature)
            .bind(bounds.lower_temperature)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }
}

impl BoundsProvider for SqliteBoundsRepository {
    async fn bounds_for(&self, area: &AreaId) -> Result<Option<Bounds>, PlantHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_AREA)
            .bind(area.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use planthub_domain::error::ValidationError;

    async fn setup() -> (SqliteBoundsRepository, SqlitePool) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();
        (SqliteBoundsRepository::new(pool.clone()), pool)
    }

    fn area(id: &str) -> AreaId {
        AreaId::new(id).unwrap()
    }

    #[tokio::test]
    async fn should_save_and_fetch_bounds() {
        let (repo, _) = setup().await;
        let bounds = Bounds::builder()
            .humidity(30.0, 70.0)
            .temperature(15.0, 28.0)
            .build()
            .unwrap();

        repo.save(&area("A1"), bounds).await.unwrap();

        let fetched = repo.bounds_for(&area("A1")).await.unwrap();
        assert_eq!(fetched, Some(bounds));
    }

    #[tokio::test]
    async fn should_default_unset_temperature_bounds_to_zero() {
        let (repo, pool) = setup().await;
        sqlx::query("INSERT INTO area_plant (id, upper_humidity, lower_humidity) VALUES (?, ?, ?)")
            .bind("A1")
            .bind(70.0)
            .bind(30.0)
            .execute(&pool)
            .await
            .unwrap();

        let fetched = repo.bounds_for(&area("A1")).await.unwrap().unwrap();
        assert!(fetched.upper_temperature.abs() < f64::EPSILON);
        assert!((fetched.lower_humidity - 30.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_return_none_when_area_has_no_bounds() {
        let (repo, _) = setup().await;
        assert!(repo.bounds_for(&area("A404")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_overwrite_existing_bounds() {
        let (repo, _) = setup().await;
        let first = Bounds::builder().humidity(30.0, 70.0).build().unwrap();
        let second = Bounds::builder().humidity(40.0, 60.0).build().unwrap();

        repo.save(&area("A1"), first).await.unwrap();
        repo.save(&area("A1"), second).await.unwrap();

        assert_eq!(repo.bounds_for(&area("A1")).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn should_reject_saving_inverted_bounds() {
        let (repo, _) = setup().await;
        let inverted = Bounds {
            upper_temperature: 0.0,
            lower_temperature: 0.0,
            upper_humidity: 20.0,
            lower_humidity: 80.0,
        };
        let result = repo.save(&area("A1"), inverted).await;
        assert!(matches!(
            result,
            Err(PlantHubError::Validation(ValidationError::InvertedBounds { .. }))
        ));
    }

    #[tokio::test]
    async fn should_report_storage_error_for_inverted_stored_bounds() {
        let (repo, pool) = setup().await;
        sqlx::query("INSERT INTO area_plant (id, upper_humidity, lower_humidity) VALUES (?, ?, ?)")
            .bind("A1")
            .bind(20.0)
            .bind(80.0)
            .execute(&pool)
            .await
            .unwrap();

        let result = repo.bounds_for(&area("A1")).await;
        assert!(matches!(result, Err(PlantHubError::Storage(_))));
    }
}
