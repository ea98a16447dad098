//! Inbound transport messages.
//!
//! Transport adapters do not call into the application directly: they push
//! [`InboundMessage`]s onto a `tokio::sync::mpsc` channel consumed by the
//! [`MessageIngestor`](crate::ingestor::MessageIngestor).

/// A raw message received on a subscribed topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub topic: String,
    pub payload: Vec<u8>,
}

impl InboundMessage {
    #[must_use]
    pub fn new(topic: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
        }
    }
}
