//! Wire format shared with sensors and actuators.
//!
//! Sensors publish a JSON array of reports:
//!
//! ```json
//! [{ "device_id": "S1", "values": [22.0, 25.0] }]
//! ```
//!
//! where `values` is `[temperature, humidity]`. Actuators receive a JSON
//! array holding one command whose values are strings:
//!
//! ```json
//! [{"device_id":"D1","values":["1","5000"]}]
//! ```

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::id::SensorId;
use crate::reading::Reading;

/// Why an inbound sensor report was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The payload does not match the report schema.
    #[error("malformed sensor report")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SensorReport {
    device_id: SensorId,
    values: [f64; 2],
}

impl From<SensorReport> for Reading {
    fn from(report: SensorReport) -> Self {
        let [temperature, humidity] = report.values;
        Reading::new(report.device_id, temperature, humidity)
    }
}

/// Parse a sensor-report payload into readings, in payload order.
///
/// The whole payload is rejected if any element fails validation.
///
/// # Errors
///
/// Returns [`ReportError::Malformed`] when the payload is not a JSON array of
/// well-formed reports (missing field, wrong arity, non-numeric metric, or a
/// `device_id` without the sensor tag).
pub fn parse_sensor_report(payload: &[u8]) -> Result<Vec<Reading>, ReportError> {
    let reports: Vec<SensorReport> = serde_json::from_slice(payload)?;
    Ok(reports.into_iter().map(Reading::from).collect())
}

#[derive(Debug, Serialize)]
struct CommandMessage<'a> {
    device_id: &'a str,
    values: [String; 2],
}

/// Encode a command as the actuator payload.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if serialization fails.
pub fn encode_command(command: &Command) -> Result<Vec<u8>, serde_json::Error> {
    let message = CommandMessage {
        device_id: command.device.as_str(),
        values: [
            command.action.wire_code().to_string(),
            command.duration_ms.to_string(),
        ],
    };
    serde_json::to_vec(&[message])
}
