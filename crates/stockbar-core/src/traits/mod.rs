//! Core traits for the stock ticker.

mod provider;
mod sink;

pub use provider::QuoteProvider;
pub use sink::DisplaySink;
