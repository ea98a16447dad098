//! Storage-specific error type wrapping sqlx errors.

use planthub_domain::error::{PlantHubError, ValidationError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row violates a domain invariant (bad identifier tag,
    /// inverted bounds, …).
    #[error("stored row is invalid")]
    InvalidRow(#[from] ValidationError),
}

impl From<StorageError> for PlantHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_invalid_row_to_storage_error() {
        let err: PlantHubError = StorageError::from(ValidationError::EmptyIdentifier).into();
        assert!(matches!(err, PlantHubError::Storage(_)));
    }

    #[test]
    fn should_display_database_error() {
        let err = StorageError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), "database error");
    }
}
