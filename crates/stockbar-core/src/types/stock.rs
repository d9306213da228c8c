//! Tracked instruments and provider quote records.

use serde::{Deserialize, Serialize};

use super::canonicalize;

/// One quote record returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Provider code
    pub code: String,
    /// Instrument name
    pub name: String,
    /// Last price
    #[serde(default)]
    pub price: f64,
    /// Absolute change against the previous close
    #[serde(default)]
    pub updown: f64,
    /// Relative change as a fraction (0.01 == 1%)
    #[serde(default)]
    pub percent: f64,
    /// Session high
    #[serde(default)]
    pub high: f64,
    /// Session low
    #[serde(default)]
    pub low: f64,
    /// Session open
    #[serde(default)]
    pub open: f64,
    /// Previous close
    #[serde(default)]
    pub yestclose: f64,
}

/// A tracked instrument and its last known quote.
///
/// `code` and `symbol` are fixed at construction. The quote fields start
/// zeroed (and `name` empty) and only change through [`Stock::update`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stock {
    code: String,
    symbol: String,
    alias: String,
    name: Option<String>,
    price: f64,
    updown: f64,
    percent: f64,
    high: f64,
    low: f64,
    open: f64,
    yestclose: f64,
}

impl Stock {
    /// Create a stock from a user-supplied symbol and optional alias.
    pub fn new(symbol: impl Into<String>, alias: Option<String>) -> Self {
        let symbol = symbol.into();
        Self {
            code: canonicalize(&symbol),
            symbol,
            alias: alias.unwrap_or_default(),
            name: None,
            price: 0.0,
            updown: 0.0,
            percent: 0.0,
            high: 0.0,
            low: 0.0,
            open: 0.0,
            yestclose: 0.0,
        }
    }

    /// Provider-facing code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Symbol as written in the configuration.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Display label chosen by the user, empty when not configured.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Instrument name from the last snapshot.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Absolute change against the previous close.
    pub fn updown(&self) -> f64 {
        self.updown
    }

    /// Relative change as a fraction.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn yestclose(&self) -> f64 {
        self.yestclose
    }

    /// Whether a snapshot has ever been applied.
    pub fn is_loaded(&self) -> bool {
        self.name.is_some()
    }

    /// Overwrite the quote fields with a snapshot.
    pub fn update(&mut self, snapshot: &Snapshot) {
        self.name = Some(snapshot.name.clone());
        self.price = snapshot.price;
        self.updown = snapshot.updown;
        self.percent = snapshot.percent;
        self.high = snapshot.high;
        self.low = snapshot.low;
        self.open = snapshot.open;
        self.yestclose = snapshot.yestclose;
    }
}
