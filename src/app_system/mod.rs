//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod kitchen_system;
pub mod orders_system;
pub mod telemetry;

pub use config::*;
pub use kitchen_system::*;
pub use orders_system::*;
pub use telemetry::*;
