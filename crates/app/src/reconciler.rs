//! Reconciler — the periodic control loop.
//!
//! Every tick the reconciler:
//!
//! 1. drains the pending readings and hands them to the [`AuditLog`];
//! 2. polls the automation flag (a read failure counts as disabled);
//! 3. when enabled, walks every area with a known humidity, resolves its
//!    actuator and bounds, runs [`decide`] and publishes the resulting
//!    command, recording it once published.
//!
//! One area failing never stops the others. Nothing read from the store is
//! kept past the cycle that read it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};

use planthub_domain::command::Command;
use planthub_domain::id::AreaId;
use planthub_domain::policy::decide;
use planthub_domain::reading::Reading;

use crate::ports::{AreaDirectory, AuditLog, AutomationMode, BoundsProvider, CommandPublisher};
use crate::state::ControlState;

/// Summary of one reconciliation cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleReport {
    /// Readings drained from the pending queue.
    pub flushed: usize,
    /// Whether the automation flag read `true`.
    pub automation_enabled: bool,
    /// Commands successfully published, in area order.
    pub commands: Vec<Command>,
    /// Areas without a device or bounds.
    pub skipped: usize,
    /// Areas where a lookup or the publish failed.
    pub failed: usize,
}

enum AreaOutcome {
    Steady,
    Commanded(Command),
    Skipped,
    Failed,
}

/// Periodic control loop reading [`ControlState`] and driving actuators.
pub struct Reconciler<D, B, M, A, P> {
    state: Arc<ControlState>,
    directory: D,
    bounds: B,
    mode: M,
    audit: A,
    publisher: P,
}

impl<D, B, M, A, P> Reconciler<D, B, M, A, P>
where
    D: AreaDirectory,
    B: BoundsProvider,
    M: AutomationMode,
    A: AuditLog,
    P: CommandPublisher,
{
    /// Create a new reconciler over the shared state and its ports.
    pub fn new(
        state: Arc<ControlState>,
        directory: D,
        bounds: B,
        mode: M,
        audit: A,
        publisher: P,
    ) -> Self {
        Self {
            state,
            directory,
            bounds,
            mode,
            audit,
            publisher,
        }
    }

    /// Run one full cycle. Errors are logged and counted, never returned.
    pub async fn run_cycle(&self) -> CycleReport {
        let snapshot = self.state.take_snapshot().await;
        let mut report = CycleReport {
            flushed: snapshot.readings.len(),
            ..CycleReport::default()
        };

        self.record_readings(snapshot.readings).await;

        report.automation_enabled = match self.mode.is_enabled().await {
            Ok(enabled) => enabled,
            Err(err) => {
                tracing::warn!(error = ?err, "automation flag unreadable, treating as disabled");
                false
            }
        };

        if !report.automation_enabled {
            tracing::debug!(flushed = report.flushed, "automation disabled, cycle done");
            return report;
        }

        for (area, humidity) in &snapshot.areas {
            match self.reconcile_area(area, *humidity).await {
                AreaOutcome::Steady => {}
                AreaOutcome::Commanded(command) => report.commands.push(command),
                AreaOutcome::Skipped => report.skipped += 1,
                AreaOutcome::Failed => report.failed += 1,
            }
        }

        tracing::info!(
            flushed = report.flushed,
            areas = snapshot.areas.len(),
            commands = report.commands.len(),
            skipped = report.skipped,
            failed = report.failed,
            "reconciliation cycle complete"
        );
        report
    }

    async fn record_readings(&self, readings: Vec<Reading>) {
        if readings.is_empty() {
            return;
        }
        let count = readings.len();
        if let Err(err) = self.audit.record_readings(readings).await {
            tracing::warn!(count, error = ?err, "failed to record sensor readings");
        }
    }

    async fn reconcile_area(&self, area: &AreaId, humidity: f64) -> AreaOutcome {
        let device = match self.directory.controlling_device(area).await {
            Ok(Some(device)) => device,
            Ok(None) => {
                tracing::debug!(%area, "no controlling device, skipping area");
                return AreaOutcome::Skipped;
            }
            Err(err) => {
                tracing::warn!(%area, error = ?err, "device lookup failed");
                return AreaOutcome::Failed;
            }
        };

        let bounds = match self.bounds.bounds_for(area).await {
            Ok(Some(bounds)) => bounds,
            Ok(None) => {
                tracing::debug!(%area, "no bounds configured, skipping area");
                return AreaOutcome::Skipped;
            }
            Err(err) => {
                tracing::warn!(%area, error = ?err, "bounds lookup failed");
                return AreaOutcome::Failed;
            }
        };

        let Some(directive) = decide(humidity, &bounds) else {
            return AreaOutcome::Steady;
        };
        let command = directive.to_device(device);

        if let Err(err) = self.publisher.publish(&command).await {
            tracing::warn!(%area, device = %command.device, error = ?err, "failed to publish command");
            return AreaOutcome::Failed;
        }
        tracing::info!(
            %area,
            humidity,
            device = %command.device,
            action = %command.action,
            duration_ms = command.duration_ms,
            "command issued"
        );

        if let Err(err) = self.audit.record_action(&command).await {
            tracing::warn!(device = %command.device, error = ?err, "failed to record action");
        }
        AreaOutcome::Commanded(command)
    }

    /// Run a cycle every `period` until `shutdown` flips to `true` or its
    /// sender is dropped.
    ///
    /// The first cycle fires one period after start. Ticks missed while a
    /// cycle is still running are skipped, so cycles never overlap or queue
    /// up. A running cycle always completes before shutdown is observed;
    /// readings still pending at that point are recorded before returning.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub async fn run(self, period: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tracing::info!(period_secs = period.as_secs(), "reconciler started");

        while !*shutdown.borrow() {
            tokio::select! {
                _ = ticker.tick() => {
                    self.run_cycle().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        let remaining = self.state.drain_pending().await;
        let drained = remaining.len();
        self.record_readings(remaining).await;
        tracing::info!(drained, "reconciler stopped");
    }
}
