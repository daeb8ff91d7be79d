//! Order-specific domain logic: payment and cancellation transitions, listing filters.

mod actions;
pub mod entity;
pub mod error;
pub mod query;

pub use actions::*;
pub use error::*;
pub use query::*;
