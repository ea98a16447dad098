//! MQTT adapter error types.

use planthub_domain::error::PlantHubError;

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The broker did not acknowledge the connection in time.
    #[error("no broker acknowledgement within {secs}s")]
    ConnectTimeout { secs: u16 },

    /// The connection to the broker failed.
    #[error("MQTT connection error")]
    Connection(#[source] rumqttc::ConnectionError),

    /// The rumqttc client returned an error.
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),

    /// Failed to encode an outbound command.
    #[error("failed to encode MQTT payload")]
    PayloadEncode(#[source] serde_json::Error),
}

impl From<MqttError> for PlantHubError {
    fn from(err: MqttError) -> Self {
        Self::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_connect_timeout_error() {
        let err = MqttError::ConnectTimeout { secs: 10 };
        assert_eq!(err.to_string(), "no broker acknowledgement within 10s");
    }

    #[test]
    fn should_convert_to_transport_error() {
        let err: PlantHubError = MqttError::ConnectTimeout { secs: 1 }.into();
        assert!(matches!(err, PlantHubError::Transport(_)));
    }

    #[test]
    fn should_display_payload_encode_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err = MqttError::PayloadEncode(json_err);
        assert_eq!(err.to_string(), "failed to encode MQTT payload");
    }
}
