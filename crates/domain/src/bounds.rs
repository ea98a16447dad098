//! Bounds — per-area thresholds governing autonomous actuation.

use crate::error::ValidationError;

/// Humidity and temperature thresholds for one area.
///
/// Only the humidity pair takes part in [`decide`](crate::policy::decide).
/// The temperature pair is stored and carried along but has no effect on
/// any decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub upper_temperature: f64,
    pub lower_temperature: f64,
    pub upper_humidity: f64,
    pub lower_humidity: f64,
}

impl Bounds {
    /// Create a builder for constructing [`Bounds`].
    #[must_use]
    pub fn builder() -> BoundsBuilder {
        BoundsBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedBounds`] when a lower bound is
    /// greater than its upper bound.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.lower_humidity > self.upper_humidity {
            return Err(ValidationError::InvertedBounds {
                metric: "humidity",
                lower: self.lower_humidity,
                upper: self.upper_humidity,
            });
        }
        if self.lower_temperature > self.upper_temperature {
            return Err(ValidationError::InvertedBounds {
                metric: "temperature",
                lower: self.lower_temperature,
                upper: self.upper_temperature,
            });
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Bounds`]. Unset values default to `0.0`.
#[derive(Debug, Default)]
pub struct BoundsBuilder {
    upper_temperature: f64,
    lower_temperature: f64,
    upper_humidity: f64,
    lower_humidity: f64,
}

impl BoundsBuilder {
    #[must_use]
    pub fn humidity(mut self, lower: f64, upper: f64) -> Self {
        self.lower_humidity = lower;
        self.upper_humidity = upper;
        self
    }

    #[must_use]
    pub fn temperature(mut self, lower: f64, upper: f64) -> Self {
        self.lower_temperature = lower;
        self.upper_temperature = upper;
        self
    }

    /// Consume the builder, validate, and return [`Bounds`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedBounds`] if a pair is inverted.
    pub fn build(self) -> Result<Bounds, ValidationError> {
        let bounds = Bounds {
            upper_temperature: self.upper_temperature,
            lower_temperature: self.lower_temperature,
            upper_humidity: self.upper_humidity,
            lower_humidity: self.lower_humidity,
        };
        bounds.validate()?;
        Ok(bounds)
    }
}
