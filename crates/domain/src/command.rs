//! Command — an order addressed to an actuator device.

use std::fmt;

use crate::id::ActuatorId;

/// What an actuator is told to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandAction {
    Activate,
    Deactivate,
}

impl CommandAction {
    /// Return the canonical `snake_case` string representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
        }
    }

    /// Single-digit code carried on the wire (`"1"` / `"0"`).
    #[must_use]
    pub fn wire_code(self) -> &'static str {
        match self {
            Self::Activate => "1",
            Self::Deactivate => "0",
        }
    }
}

impl fmt::Display for CommandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device-independent outcome of the policy: an action and how long it lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub action: CommandAction,
    pub duration_ms: u64,
}

impl Directive {
    /// Address this directive to a device.
    #[must_use]
    pub fn to_device(self, device: ActuatorId) -> Command {
        Command {
            device,
            action: self.action,
            duration_ms: self.duration_ms,
        }
    }
}

/// A directive addressed to one actuator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub device: ActuatorId,
    pub action: CommandAction,
    pub duration_ms: u64,
}
