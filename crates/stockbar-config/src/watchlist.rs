//! Watch-list entries and their materialization into stocks.

use serde::{Deserialize, Serialize};
use stockbar_core::{ConfigurationError, Stock};

/// One raw `watch.stocks` entry.
///
/// Anything that is neither a code string nor a table with a string
/// `code` lands in `Malformed` so that [`load_watchlist`] can report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WatchEntry {
    Code(String),
    Detailed {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    },
    Malformed(serde_json::Value),
}

/// Build the stock list for a watch-list, preserving its order.
///
/// Every entry is checked before any stock is built, so a single bad
/// entry fails the whole load.
pub fn load_watchlist(entries: &[WatchEntry]) -> Result<Vec<Stock>, ConfigurationError> {
    if let Some((index, value)) = entries.iter().enumerate().find_map(|(i, e)| match e {
        WatchEntry::Malformed(value) => Some((i, value)),
        _ => None,
    }) {
        return Err(ConfigurationError::MalformedEntry {
            index,
            entry: value.to_string(),
        });
    }

    let stocks = entries
        .iter()
        .filter_map(|entry| match entry {
            WatchEntry::Code(code) => Some(Stock::new(code.clone(), None)),
            WatchEntry::Detailed { code, alias } => Some(Stock::new(code.clone(), alias.clone())),
            WatchEntry::Malformed(_) => None,
        })
        .collect();

    Ok(stocks)
}
