//! Projection of tracked stocks into display instructions.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::traits::DisplaySink;
use crate::types::Stock;

/// Direction of the last price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

impl Trend {
    fn of(updown: f64) -> Self {
        if updown > 0.0 {
            Trend::Rising
        } else if updown < 0.0 {
            Trend::Falling
        } else {
            Trend::Flat
        }
    }
}

/// What a display slot shows for one stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    /// Short label (alias, name or symbol)
    pub label: String,
    /// Price and percent change
    pub value: String,
    /// Multi-line detail text
    pub tooltip: String,
    pub trend: Trend,
}

impl From<&Stock> for DisplayItem {
    fn from(stock: &Stock) -> Self {
        let label = if !stock.alias().is_empty() {
            stock.alias().to_string()
        } else {
            stock
                .name()
                .filter(|name| !name.is_empty())
                .unwrap_or(stock.symbol())
                .to_string()
        };

        if !stock.is_loaded() {
            return Self {
                label,
                value: "--".to_string(),
                tooltip: format!("{}\nWaiting for first quote", stock.symbol()),
                trend: Trend::Flat,
            };
        }

        let name = stock.name().unwrap_or_default();
        let digits = price_precision(stock);
        let price = |v: f64| format!("{:.*}", digits, v);
        let percent = signed(stock.percent() * 100.0, 2);

        let tooltip = [
            format!("{} ({})", name, stock.symbol()),
            format!("Change: {}", signed(stock.updown(), digits)),
            format!("Percent: {}%", percent),
            format!("High: {}", price(stock.high())),
            format!("Low: {}", price(stock.low())),
            format!("Open: {}", price(stock.open())),
            format!("Prev close: {}", price(stock.yestclose())),
        ]
        .join("\n");

        Self {
            label,
            value: format!("{} {}%", price(stock.price()), percent),
            tooltip,
            trend: Trend::of(stock.updown()),
        }
    }
}

/// Funds and ETFs quote in thousandths; everything else in hundredths.
fn price_precision(stock: &Stock) -> usize {
    let has_thousandths = [
        stock.price(),
        stock.high(),
        stock.low(),
        stock.open(),
        stock.yestclose(),
    ]
    .iter()
    .any(|v| ((v * 1000.0).round() as i64) % 10 != 0);
    if has_thousandths {
        3
    } else {
        2
    }
}

fn signed(value: f64, digits: usize) -> String {
    if value > 0.0 {
        format!("+{:.*}", digits, value)
    } else if value < 0.0 {
        format!("{:.*}", digits, value)
    } else {
        format!("{:.*}", digits, 0.0)
    }
}

/// Push one display instruction per stock to the sink, in list order.
///
/// # Returns
/// The number of slots shown
pub fn render(stocks: &[Stock], sink: &mut dyn DisplaySink) -> Result<usize, RenderError> {
    for (index, stock) in stocks.iter().enumerate() {
        sink.show(index, &DisplayItem::from(stock))?;
    }
    sink.retain(stocks.len())?;
    sink.flush()?;
    Ok(stocks.len())
}
