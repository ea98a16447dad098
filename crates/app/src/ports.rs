//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod audit_log;
pub mod automation;
pub mod command_publisher;
pub mod directory;
pub mod transport;

pub use audit_log::AuditLog;
pub use automation::{AutomationAdmin, AutomationMode};
pub use command_publisher::CommandPublisher;
pub use directory::{AreaDirectory, BoundsProvider};
pub use transport::InboundMessage;
