//! Directory ports — area membership and per-area thresholds.
//!
//! Both are read-only views over the document store. Every call goes to the
//! store; nothing is cached by the application layer.

use std::future::Future;

use planthub_domain::bounds::Bounds;
use planthub_domain::error::PlantHubError;
use planthub_domain::id::{ActuatorId, AreaId, DeviceRef};

/// Resolves devices to areas and areas to their controlling actuator.
pub trait AreaDirectory {
    /// Find the area owning a sensor or actuator. `None` when unmapped.
    fn area_of(
        &self,
        device: &DeviceRef,
    ) -> impl Future<Output = Result<Option<AreaId>, PlantHubError>> + Send;

    /// Find the actuator controlling an area. `None` when the area has no
    /// device. With several candidates the lowest identifier wins.
    fn controlling_device(
        &self,
        area: &AreaId,
    ) -> impl Future<Output = Result<Option<ActuatorId>, PlantHubError>> + Send;
}

/// Fetches the thresholds configured for an area.
pub trait BoundsProvider {
    /// `None` when no bounds are configured for `area`.
    fn bounds_for(
        &self,
        area: &AreaId,
    ) -> impl Future<Output = Result<Option<Bounds>, PlantHubError>> + Send;
}
