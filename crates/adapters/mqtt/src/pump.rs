//! Inbound event loop — drives the rumqttc connection and forwards
//! publishes onto the ingestion channel.

use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, Packet, QoS};
use tokio::sync::mpsc;

use planthub_app::ports::InboundMessage;

/// Owns the rumqttc [`EventLoop`]. Must be running for commands to leave
/// the process.
pub struct InboundPump {
    eventloop: EventLoop,
    client: AsyncClient,
    sensor_topic: String,
    inbound: mpsc::Sender<InboundMessage>,
    reconnect_delay: Duration,
}

impl InboundPump {
    pub(crate) fn new(
        eventloop: EventLoop,
        client: AsyncClient,
        sensor_topic: String,
        inbound: mpsc::Sender<InboundMessage>,
        reconnect_delay: Duration,
    ) -> Self {
        Self {
            eventloop,
            client,
            sensor_topic,
            inbound,
            reconnect_delay,
        }
    }

    /// Poll the connection until the ingestion channel closes.
    ///
    /// Connection errors are logged and retried after the reconnect delay;
    /// the sensor topic is re-subscribed on every new connection.
    pub async fn run(mut self) {
        loop {
            match self.eventloop.poll().await {
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    let message = InboundMessage::new(publish.topic, publish.payload.to_vec());
                    if self.inbound.send(message).await.is_err() {
                        tracing::info!("inbound channel closed, stopping MQTT event loop");
                        break;
                    }
                }
                Ok(Event::Incoming(Packet::ConnAck(_))) => self.resubscribe(),
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(
                        error = ?err,
                        retry_in_secs = self.reconnect_delay.as_secs(),
                        "MQTT connection error"
                    );
                    tokio::time::sleep(self.reconnect_delay).await;
                }
            }
        }
    }

    /// Queue the sensor subscription for the fresh connection.
    ///
    /// Only this loop drains the request queue, so the request is never
    /// awaited: a full queue is logged and the loop keeps polling.
    fn resubscribe(&self) {
        tracing::info!(topic = %self.sensor_topic, "MQTT connected, subscribing");
        if let Err(err) = self.client.try_subscribe(&self.sensor_topic, QoS::AtLeastOnce) {
            tracing::warn!(error = ?err, "failed to queue sensor topic subscription");
        }
    }
}
