//! In-memory port implementations shared by the unit tests of this crate.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::{Arc, Mutex};

use planthub_domain::bounds::Bounds;
use planthub_domain::command::Command;
use planthub_domain::error::PlantHubError;
use planthub_domain::id::{ActuatorId, AreaId, DeviceRef};
use planthub_domain::reading::Reading;

use crate::ports::{AreaDirectory, AuditLog, AutomationMode, BoundsProvider, CommandPublisher};

#[derive(Debug, thiserror::Error)]
#[error("store unreachable")]
pub struct Unreachable;

pub fn unreachable() -> PlantHubError {
    PlantHubError::Storage(Box::new(Unreachable))
}

fn area(id: &str) -> AreaId {
    AreaId::new(id).unwrap()
}

// ── Directory ──────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryDirectory {
    sensors: HashMap<String, AreaId>,
    actuators: Vec<(ActuatorId, AreaId)>,
    fail_area_lookup: bool,
    failing_areas: HashSet<AreaId>,
}

impl InMemoryDirectory {
    pub fn with_sensor(mut self, sensor: &str, area_id: &str) -> Self {
        self.sensors.insert(sensor.to_string(), area(area_id));
        self
    }

    pub fn with_actuator(mut self, actuator: &str, area_id: &str) -> Self {
        self.actuators
            .push((ActuatorId::new(actuator).unwrap(), area(area_id)));
        self
    }

    pub fn failing_area_lookup(mut self) -> Self {
        self.fail_area_lookup = true;
        self
    }

    pub fn failing_device_lookup_for(mut self, area_id: &str) -> Self {
        self.failing_areas.insert(area(area_id));
        self
    }
}

impl AreaDirectory for InMemoryDirectory {
    fn area_of(
        &self,
        device: &DeviceRef,
    ) -> impl Future<Output = Result<Option<AreaId>, PlantHubError>> + Send {
        let result = if self.fail_area_lookup {
            Err(unreachable())
        } else {
            Ok(match device {
                DeviceRef::Sensor(id) => self.sensors.get(id.as_str()).cloned(),
                DeviceRef::Actuator(id) => self
                    .actuators
                    .iter()
                    .find(|(actuator, _)| actuator == id)
                    .map(|(_, area)| area.clone()),
            })
        };
        async { result }
    }

    fn controlling_device(
        &self,
        area: &AreaId,
    ) -> impl Future<Output = Result<Option<ActuatorId>, PlantHubError>> + Send {
        let result = if self.failing_areas.contains(area) {
            Err(unreachable())
        } else {
            Ok(self
                .actuators
                .iter()
                .filter(|(_, owner)| owner == area)
                .map(|(actuator, _)| actuator.clone())
                .min())
        };
        async { result }
    }
}

// ── Bounds ─────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryBounds {
    bounds: HashMap<AreaId, Bounds>,
    failing_areas: HashSet<AreaId>,
}

impl InMemoryBounds {
    pub fn with(mut self, area_id: &str, lower: f64, upper: f64) -> Self {
        let bounds = Bounds::builder().humidity(lower, upper).build().unwrap();
        self.bounds.insert(area(area_id), bounds);
        self
    }

    pub fn failing_for(mut self, area_id: &str) -> Self {
        self.failing_areas.insert(area(area_id));
        self
    }
}

impl BoundsProvider for InMemoryBounds {
    fn bounds_for(
        &self,
        area: &AreaId,
    ) -> impl Future<Output = Result<Option<Bounds>, PlantHubError>> + Send {
        let result = if self.failing_areas.contains(area) {
            Err(unreachable())
        } else {
            Ok(self.bounds.get(area).copied())
        };
        async { result }
    }
}

// ── Automation flag ────────────────────────────────────────────

/// Flag whose value can be changed between cycles. `None` simulates an
/// unreachable store.
#[derive(Clone)]
pub struct SharedMode(Arc<Mutex<Option<bool>>>);

impl SharedMode {
    pub fn new(value: Option<bool>) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }

    pub fn set(&self, value: Option<bool>) {
        *self.0.lock().unwrap() = value;
    }
}

impl AutomationMode for SharedMode {
    fn is_enabled(&self) -> impl Future<Output = Result<bool, PlantHubError>> + Send {
        let value = *self.0.lock().unwrap();
        async move { value.ok_or_else(unreachable) }
    }
}

// ── Audit log ──────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct SpyAuditLog {
    pub batches: Arc<Mutex<Vec<Vec<Reading>>>>,
    pub actions: Arc<Mutex<Vec<Command>>>,
    pub failing: bool,
}

impl SpyAuditLog {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn batches(&self) -> Vec<Vec<Reading>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn actions(&self) -> Vec<Command> {
        self.actions.lock().unwrap().clone()
    }
}

impl AuditLog for SpyAuditLog {
    fn record_readings(
        &self,
        readings: Vec<Reading>,
    ) -> impl Future<Output = Result<(), PlantHubError>> + Send {
        let result = if self.failing {
            Err(unreachable())
        } else {
            self.batches.lock().unwrap().push(readings);
            Ok(())
        };
        async { result }
    }

    fn record_action(
        &self,
        command: &Command,
    ) -> impl Future<Output = Result<(), PlantHubError>> + Send {
        let result = if self.failing {
            Err(unreachable())
        } else {
            self.actions.lock().unwrap().push(command.clone());
            Ok(())
        };
        async { result }
    }
}

// ── Publisher ──────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct SpyPublisher {
    pub published: Arc<Mutex<Vec<Command>>>,
    pub rejected_devices: HashSet<String>,
}

impl SpyPublisher {
    pub fn rejecting(device: &str) -> Self {
        Self {
            rejected_devices: HashSet::from([device.to_string()]),
            ..Self::default()
        }
    }

    pub fn published(&self) -> Vec<Command> {
        self.published.lock().unwrap().clone()
    }
}

impl CommandPublisher for SpyPublisher {
    fn publish(&self, command: &Command) -> impl Future<Output = Result<(), PlantHubError>> + Send {
        let result = if self.rejected_devices.contains(command.device.as_str()) {
            Err(PlantHubError::Transport(Box::new(Unreachable)))
        } else {
            self.published.lock().unwrap().push(command.clone());
            Ok(())
        };
        async { result }
    }
}
