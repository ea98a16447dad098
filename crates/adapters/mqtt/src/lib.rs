//! # planthub-adapter-mqtt
//!
//! MQTT adapter — connects planthub to the broker shared with the sensors
//! and actuators.
//!
//! ## How it works
//!
//! [`connect`] opens a rumqttc session, waits for the broker
//! acknowledgement and subscribes to the sensor topic. It hands back two
//! halves:
//!
//! - [`MqttCommandPublisher`], the outbound [`CommandPublisher`] used by the
//!   reconciler
//! - [`InboundPump`], a task that drives the connection and forwards every
//!   received publish as an [`InboundMessage`]
//!
//! ## Wire formats
//!
//! | Direction | Default topic | Payload |
//! |-----------|---------------|---------|
//! | Inbound | `Topic/TempHumi` | `[{"device_id":"S1","values":[22.0,25.0]}]` |
//! | Outbound | `Topic/Speaker` | `[{"device_id":"D1","values":["1","5000"]}]` |
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `planthub-app` and `planthub-domain`.
//!
//! [`CommandPublisher`]: planthub_app::ports::CommandPublisher

mod config;
mod error;
mod publisher;
mod pump;

pub use config::MqttConfig;
pub use error::MqttError;
pub use publisher::MqttCommandPublisher;
pub use pump::InboundPump;

use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};
use tokio::sync::mpsc;

use planthub_app::ports::InboundMessage;

/// Connect to the broker described by `config`.
///
/// Inbound publishes on the sensor topic are forwarded to `inbound` once
/// the returned [`InboundPump`] is running.
///
/// # Errors
///
/// Returns [`MqttError::Connection`] when the broker cannot be reached,
/// [`MqttError::ConnectTimeout`] when it does not acknowledge within
/// `connect_timeout_secs`, or [`MqttError::Client`] if the subscription
/// request cannot be queued.
pub async fn connect(
    config: &MqttConfig,
    inbound: mpsc::Sender<InboundMessage>,
) -> Result<(MqttCommandPublisher, InboundPump), MqttError> {
    let (client, mut eventloop) = AsyncClient::new(options(config), config.channel_capacity);

    tracing::info!(
        host = %config.broker_host,
        port = config.broker_port,
        client_id = %config.client_id,
        "connecting to MQTT broker"
    );

    let timeout = Duration::from_secs(u64::from(config.connect_timeout_secs));
    tokio::time::timeout(timeout, wait_for_connack(&mut eventloop))
        .await
        .map_err(|_| MqttError::ConnectTimeout {
            secs: config.connect_timeout_secs,
        })??;

    client
        .try_subscribe(&config.sensor_topic, QoS::AtLeastOnce)
        .map_err(MqttError::Client)?;

    tracing::info!(
        sensor_topic = %config.sensor_topic,
        command_topic = %config.command_topic,
        "MQTT transport ready"
    );

    let publisher = MqttCommandPublisher::new(client.clone(), &config.command_topic);
    let pump = InboundPump::new(
        eventloop,
        client,
        config.sensor_topic.clone(),
        inbound,
        Duration::from_secs(u64::from(config.reconnect_delay_secs)),
    );
    Ok((publisher, pump))
}

fn options(config: &MqttConfig) -> MqttOptions {
    let mut options = MqttOptions::new(&config.client_id, &config.broker_host, config.broker_port);
    options.set_keep_alive(Duration::from_secs(u64::from(config.keep_alive_secs)));
    if let Some(username) = &config.username {
        options.set_credentials(username, config.password.as_deref().unwrap_or_default());
    }
    options
}

async fn wait_for_connack(eventloop: &mut EventLoop) -> Result<(), MqttError> {
    loop {
        if let Event::Incoming(Packet::ConnAck(_)) =
            eventloop.poll().await.map_err(MqttError::Connection)?
        {
            return Ok(());
        }
    }
}
