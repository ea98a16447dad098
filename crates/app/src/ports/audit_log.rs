//! Audit log port — append-only history of readings and actions.

use std::future::Future;

use planthub_domain::command::Command;
use planthub_domain::error::PlantHubError;
use planthub_domain::reading::Reading;

/// Appends readings and issued commands to durable storage. Never read back
/// by the application.
pub trait AuditLog {
    /// Persist a batch of readings, in order.
    fn record_readings(
        &self,
        readings: Vec<Reading>,
    ) -> impl Future<Output = Result<(), PlantHubError>> + Send;

    /// Persist a command that was published to an actuator.
    fn record_action(
        &self,
        command: &Command,
    ) -> impl Future<Output = Result<(), PlantHubError>> + Send;
}
