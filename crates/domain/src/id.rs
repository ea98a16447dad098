//! Identifier newtypes.
//!
//! Device identifiers share a single string space and are namespaced by a
//! leading type tag: `S` for sensors and `D` for actuator devices. The tag is
//! checked on construction (including deserialization), so a [`SensorId`] can
//! never hold an actuator identifier and vice versa.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_tagged_id {
    ($(#[doc = $doc:expr])* $name:ident, tag = $tag:literal, kind = $kind:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Leading character every identifier of this kind starts with.
            pub const TAG: char = $tag;

            /// Validate and wrap an identifier.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::EmptyIdentifier`] for an empty string and
            /// [`ValidationError::UntaggedIdentifier`] when the tag is missing or
            /// nothing follows it.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(ValidationError::EmptyIdentifier);
                }
                if !value.starts_with(Self::TAG) || value.len() == Self::TAG.len_utf8() {
                    return Err(ValidationError::UntaggedIdentifier {
                        id: value,
                        kind: $kind,
                        tag: Self::TAG,
                    });
                }
                Ok(Self(value))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_tagged_id!(
    /// Identifier of a humidity/temperature sensor (`S…`).
    SensorId,
    tag = 'S',
    kind = "sensor"
);

define_tagged_id!(
    /// Identifier of an actuator device (`D…`).
    ActuatorId,
    tag = 'D',
    kind = "actuator"
);

/// Any tagged device identifier, routed by its leading tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceRef {
    Sensor(SensorId),
    Actuator(ActuatorId),
}

impl FromStr for DeviceRef {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            None => Err(ValidationError::EmptyIdentifier),
            Some(ActuatorId::TAG) => ActuatorId::new(s).map(Self::Actuator),
            // Anything that is not an actuator must be a well-formed sensor.
            Some(_) => SensorId::new(s).map(Self::Sensor),
        }
    }
}

impl fmt::Display for DeviceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(id) => id.fmt(f),
            Self::Actuator(id) => id.fmt(f),
        }
    }
}

impl From<SensorId> for DeviceRef {
    fn from(id: SensorId) -> Self {
        Self::Sensor(id)
    }
}

impl From<ActuatorId> for DeviceRef {
    fn from(id: ActuatorId) -> Self {
        Self::Actuator(id)
    }
}

/// Identifier of a physical area (zone, greenhouse bed, room).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AreaId(String);

impl AreaId {
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentifier`] for an empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AreaId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AreaId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AreaId> for String {
    fn from(id: AreaId) -> Self {
        id.0
    }
}
