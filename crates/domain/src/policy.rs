//! Humidity policy — decides whether an area's actuator should run.

use crate::bounds::Bounds;
use crate::command::{CommandAction, Directive};

/// How long an actuator runs when humidity drops below the lower bound.
pub const ACTIVATE_DURATION_MS: u64 = 5000;

/// Map the latest humidity of an area and its bounds to a directive.
///
/// Bounds are exclusive: a value sitting exactly on a bound yields `None`.
/// Temperature bounds are not consulted.
#[must_use]
pub fn decide(humidity: f64, bounds: &Bounds) -> Option<Directive> {
    if humidity < bounds.lower_humidity {
        Some(Directive {
            action: CommandAction::Activate,
            duration_ms: ACTIVATE_DURATION_MS,
        })
    } else if humidity > bounds.upper_humidity {
        Some(Directive {
            action: CommandAction::Deactivate,
            duration_ms: 0,
        })
    } else {
        None
    }
}
