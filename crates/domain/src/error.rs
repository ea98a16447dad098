//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PlantHubError`] via `From` when crossing a port boundary.

/// Top-level error returned by every port and service.
#[derive(Debug, thiserror::Error)]
pub enum PlantHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The document store failed (connection, query, decoding).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The publish/subscribe transport failed.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    #[error("identifier {id:?} must start with the {kind} tag '{tag}'")]
    UntaggedIdentifier {
        id: String,
        kind: &'static str,
        tag: char,
    },

    #[error("{metric} lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds {
        metric: &'static str,
        lower: f64,
        upper: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error() {
        let err: PlantHubError = ValidationError::EmptyIdentifier.into();
        assert!(matches!(
            err,
            PlantHubError::Validation(ValidationError::EmptyIdentifier)
        ));
    }

    #[test]
    fn should_display_untagged_identifier() {
        let err = ValidationError::UntaggedIdentifier {
            id: "X1".to_string(),
            kind: "sensor",
            tag: 'S',
        };
        assert_eq!(
            err.to_string(),
            "identifier \"X1\" must start with the sensor tag 'S'"
        );
    }
}
