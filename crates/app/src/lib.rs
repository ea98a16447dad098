//! # planthub-app
//!
//! Application layer — the control loop and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AreaDirectory` — device → area and area → actuator lookups
//!   - `BoundsProvider` — per-area thresholds
//!   - `AutomationMode` / `AutomationAdmin` — read / write the automation flag
//!   - `AuditLog` — append readings and issued commands
//!   - `CommandPublisher` — deliver commands to actuators
//! - Own the shared **control state** (pending readings, latest humidity per area)
//! - Provide the **message ingestor** (single consumer of inbound transport messages)
//! - Provide the **reconciler** (timer-driven policy evaluation)
//!
//! ## Dependency rule
//! Depends on `planthub-domain` only (plus `tokio` for sync and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ingestor;
pub mod ports;
pub mod reconciler;
pub mod state;

#[cfg(test)]
mod testing;
