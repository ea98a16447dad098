//! [`CommandPublisher`] backed by a rumqttc client.

use rumqttc::{AsyncClient, QoS};

use planthub_app::ports::CommandPublisher;
use planthub_domain::command::Command;
use planthub_domain::error::PlantHubError;
use planthub_domain::wire;

use crate::error::MqttError;

/// Publishes encoded commands on the actuator command topic.
///
/// Publishing only enqueues the request; the [`InboundPump`](crate::InboundPump)
/// event loop performs the network write. A full request queue (broker
/// unreachable for a while) fails the publish instead of waiting.
#[derive(Clone)]
pub struct MqttCommandPublisher {
    client: AsyncClient,
    topic: String,
}

impl MqttCommandPublisher {
    pub(crate) fn new(client: AsyncClient, topic: impl Into<String>) -> Self {
        Self {
            client,
            topic: topic.into(),
        }
    }
}

impl CommandPublisher for MqttCommandPublisher {
    async fn publish(&self, command: &Command) -> Result<(), PlantHubError> {
        let payload = wire::encode_command(command).map_err(MqttError::PayloadEncode)?;

        self.client
            .try_publish(&self.topic, QoS::AtLeastOnce, false, payload)
            .map_err(MqttError::Client)?;

        tracing::debug!(topic = %self.topic, device = %command.device, "command enqueued");
        Ok(())
    }
}
