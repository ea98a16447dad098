//! Automation flag ports.
//!
//! Reading and writing the flag are separate traits: the reconciler only
//! ever receives an [`AutomationMode`], so the autonomous control path has
//! no way to change the flag.

use std::future::Future;

use planthub_domain::error::PlantHubError;

/// Read side of the automation flag.
pub trait AutomationMode {
    /// Whether autonomous commands are allowed right now. A missing flag
    /// reads as `false`.
    fn is_enabled(&self) -> impl Future<Output = Result<bool, PlantHubError>> + Send;
}

/// Administrative write side of the automation flag.
pub trait AutomationAdmin {
    fn set_enabled(&self, enabled: bool) -> impl Future<Output = Result<(), PlantHubError>> + Send;
}
