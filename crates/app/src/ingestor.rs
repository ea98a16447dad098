//! Message ingestor — turns sensor reports into control state.
//!
//! The ingestor is the single consumer of the inbound transport channel.
//! For each message on the sensor-report topic it parses the payload,
//! resolves every reading's area through the [`AreaDirectory`], then queues
//! the readings and updates the per-area humidity in one locked step.

use std::sync::Arc;

use tokio::sync::mpsc;

use planthub_domain::id::{AreaId, DeviceRef};
use planthub_domain::wire;

use crate::ports::{AreaDirectory, InboundMessage};
use crate::state::ControlState;

/// What happened to one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The topic is not the sensor-report topic.
    Ignored,
    /// The payload failed validation and was dropped.
    Rejected,
    /// Readings were queued; `mapped` of them updated an area.
    Accepted { readings: usize, mapped: usize },
}

/// Single ingestion actor owning the write side of [`ControlState`].
pub struct MessageIngestor<D> {
    sensor_topic: String,
    directory: D,
    state: Arc<ControlState>,
}

impl<D: AreaDirectory> MessageIngestor<D> {
    /// Create an ingestor accepting messages on `sensor_topic`.
    pub fn new(sensor_topic: impl Into<String>, directory: D, state: Arc<ControlState>) -> Self {
        Self {
            sensor_topic: sensor_topic.into(),
            directory,
            state,
        }
    }

    /// Handle one inbound message. Never fails: every problem is logged.
    pub async fn on_message(&self, topic: &str, payload: &[u8]) -> IngestOutcome {
        if topic != self.sensor_topic {
            tracing::debug!(topic, "ignoring message on unrelated topic");
            return IngestOutcome::Ignored;
        }

        let readings = match wire::parse_sensor_report(payload) {
            Ok(readings) => readings,
            Err(err) => {
                tracing::warn!(topic, error = ?err, "dropping malformed sensor report");
                return IngestOutcome::Rejected;
            }
        };

        let mut updates: Vec<(AreaId, f64)> = Vec::with_capacity(readings.len());
        for reading in &readings {
            let device = DeviceRef::from(reading.source.clone());
            match self.directory.area_of(&device).await {
                Ok(Some(area)) => updates.push((area, reading.humidity)),
                Ok(None) => {
                    tracing::debug!(sensor = %reading.source, "sensor is not mapped to an area");
                }
                Err(err) => {
                    tracing::warn!(
                        sensor = %reading.source,
                        error = ?err,
                        "area lookup failed, aggregate not updated"
                    );
                }
            }
        }

        let outcome = IngestOutcome::Accepted {
            readings: readings.len(),
            mapped: updates.len(),
        };
        self.state.ingest(readings, updates).await;
        outcome
    }

    /// Consume `receiver` until every sender is dropped.
    pub async fn run(self, mut receiver: mpsc::Receiver<InboundMessage>) {
        tracing::info!(topic = %self.sensor_topic, "message ingestor started");
        while let Some(message) = receiver.recv().await {
            self.on_message(&message.topic, &message.payload).await;
        }
        tracing::info!("message ingestor stopped, inbound channel closed");
    }
}
