//! Core data types for the stock ticker.

mod code;
mod stock;

pub use code::canonicalize;
pub use stock::{Snapshot, Stock};
