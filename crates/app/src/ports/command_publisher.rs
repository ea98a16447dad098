//! Command publisher port — delivers commands to actuators.

use std::future::Future;

use planthub_domain::command::Command;
use planthub_domain::error::PlantHubError;

/// Sends a [`Command`] to the actuator-command channel of the transport.
pub trait CommandPublisher {
    fn publish(&self, command: &Command) -> impl Future<Output = Result<(), PlantHubError>> + Send;
}
