//! # planthub-domain
//!
//! Pure domain model for the planthub humidity controller.
//!
//! ## Responsibilities
//! - Foundational types: tagged identifiers, error conventions, timestamps
//! - Define **Readings** (temperature/humidity samples reported by a sensor)
//! - Define **Bounds** (per-area thresholds)
//! - Define **Commands** (activate/deactivate orders addressed to an actuator)
//! - Define the **policy** that maps a humidity value and bounds to a directive
//! - Define the **wire format** exchanged with sensors and actuators
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod bounds;
pub mod command;
pub mod policy;
pub mod reading;
pub mod wire;
