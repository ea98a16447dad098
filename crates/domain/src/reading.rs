//! Reading — a single temperature/humidity sample reported by a sensor.

use crate::id::SensorId;

/// One sample from a sensor. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub source: SensorId,
    pub temperature: f64,
    pub humidity: f64,
}

impl Reading {
    #[must_use]
    pub fn new(source: SensorId, temperature: f64, humidity: f64) -> Self {
        Self {
            source,
            temperature,
            humidity,
        }
    }
}
