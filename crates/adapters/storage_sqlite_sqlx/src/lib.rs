//! # planthub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the store-backed port traits defined in `planthub-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Tables
//!
//! | Table | Port |
//! |-------|------|
//! | `humid_sensor`, `devices` | [`AreaDirectory`](planthub_app::ports::AreaDirectory) |
//! | `area_plant` | [`BoundsProvider`](planthub_app::ports::BoundsProvider) |
//! | `automode` | [`AutomationMode`](planthub_app::ports::AutomationMode), [`AutomationAdmin`](planthub_app::ports::AutomationAdmin) |
//! | `sensor_log`, `devices_log` | [`AuditLog`](planthub_app::ports::AuditLog) |
//!
//! ## Dependency rule
//! Depends on `planthub-app` (for port traits) and `planthub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod audit_log;
mod automode;
mod bounds_repo;
mod directory;
mod error;
mod pool;

pub use audit_log::SqliteAuditLog;
pub use automode::SqliteAutomationFlag;
pub use bounds_repo::SqliteBoundsRepository;
pub use directory::SqliteAreaDirectory;
pub use error::StorageError;
pub use pool::{Config, Database};
