//! Shared control state — pending readings and latest humidity per area.
//!
//! Written by the [`MessageIngestor`](crate::ingestor::MessageIngestor) and
//! drained by the [`Reconciler`](crate::reconciler::Reconciler). Both sides
//! go through the same [`Mutex`]; the lock is never held across store I/O.

use std::collections::HashMap;

use tokio::sync::Mutex;

use planthub_domain::id::AreaId;
use planthub_domain::reading::Reading;

#[derive(Debug, Default)]
struct Inner {
    pending: Vec<Reading>,
    areas: HashMap<AreaId, f64>,
}

/// Everything a reconciliation cycle takes out of the shared state.
#[derive(Debug, Default)]
pub struct Snapshot {
    /// Readings received since the previous cycle, in arrival order.
    pub readings: Vec<Reading>,
    /// Latest humidity per area, sorted by area id.
    pub areas: Vec<(AreaId, f64)>,
}

/// Pending queue and per-area aggregate behind one lock.
#[derive(Debug, Default)]
pub struct ControlState {
    inner: Mutex<Inner>,
}

impl ControlState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue readings and apply their humidity to the aggregate in one
    /// critical section.
    ///
    /// `updates` pairs an area with a humidity value and is applied in order,
    /// so the last entry for an area wins.
    pub async fn ingest(&self, readings: Vec<Reading>, updates: Vec<(AreaId, f64)>) {
        let mut inner = self.inner.lock().await;
        inner.pending.extend(readings);
        for (area, humidity) in updates {
            inner.areas.insert(area, humidity);
        }
    }

    /// Drain the pending queue and copy the aggregate.
    ///
    /// The queue is emptied in place; the aggregate is left untouched.
    pub async fn take_snapshot(&self) -> Snapshot {
        let mut inner = self.inner.lock().await;
        let readings = inner.pending.drain(..).collect();
        let mut areas: Vec<(AreaId, f64)> = inner
            .areas
            .iter()
            .map(|(area, humidity)| (area.clone(), *humidity))
            .collect();
        drop(inner);
        areas.sort_by(|a, b| a.0.cmp(&b.0));
        Snapshot { readings, areas }
    }

    /// Take the pending readings without touching the aggregate.
    pub async fn drain_pending(&self) -> Vec<Reading> {
        std::mem::take(&mut self.inner.lock().await.pending)
    }

    /// Number of readings waiting for the next flush.
    pub async fn pending_len(&self) -> usize {
        self.inner.lock().await.pending.len()
    }

    /// Latest humidity recorded for `area`.
    pub async fn humidity(&self, area: &AreaId) -> Option<f64> {
        self.inner.lock().await.areas.get(area).copied()
    }

    /// Number of areas with a recorded humidity.
    pub async fn area_count(&self) -> usize {
        self.inner.lock().await.areas.len()
    }
}
