pub mod line_item;
pub mod order;
pub mod schedule;

pub use line_item::*;
pub use order::*;
pub use schedule::*;
