//! Typed handles the HTTP layer uses to talk to the resource actors.

#[macro_use]
mod macros;
pub mod order_client;
pub mod schedule_client;

pub use order_client::OrderClient;
pub use schedule_client::ScheduleClient;
