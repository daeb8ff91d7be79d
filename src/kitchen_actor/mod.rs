//! Kitchen schedule domain logic.

mod actions;
pub mod entity;
pub mod error;
pub mod query;

pub use actions::*;
pub use error::*;
pub use query::*;
