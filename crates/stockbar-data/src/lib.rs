//! Quote providers.

mod netease;

pub use netease::{NeteaseConfig, NeteaseProvider};
