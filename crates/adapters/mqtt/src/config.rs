//! MQTT transport configuration.

use serde::Deserialize;

/// Configuration for the MQTT transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MqttConfig {
    /// MQTT broker hostname or IP address.
    pub broker_host: String,
    /// MQTT broker port.
    pub broker_port: u16,
    /// MQTT client identifier.
    pub client_id: String,
    /// Optional broker username.
    pub username: Option<String>,
    /// Optional broker password, only used together with `username`.
    pub password: Option<String>,
    /// Topic sensors publish their reports on.
    pub sensor_topic: String,
    /// Topic actuators listen to for commands.
    pub command_topic: String,
    /// Keep-alive interval in seconds.
    pub keep_alive_secs: u16,
    /// How long to wait for the first broker acknowledgement at startup, in seconds.
    pub connect_timeout_secs: u16,
    /// Pause between reconnection attempts after a connection error, in seconds.
    pub reconnect_delay_secs: u16,
    /// Capacity of the client request queue and of the inbound channel.
    pub channel_capacity: usize,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            broker_host: "localhost".to_string(),
            broker_port: 1883,
            client_id: "planthub".to_string(),
            username: None,
            password: None,
            sensor_topic: "Topic/TempHumi".to_string(),
            command_topic: "Topic/Speaker".to_string(),
            keep_alive_secs: 30,
            connect_timeout_secs: 10,
            reconnect_delay_secs: 5,
            channel_capacity: 64,
        }
    }
}
