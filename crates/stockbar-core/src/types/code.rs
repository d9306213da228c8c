//! Conversion of user-facing symbols into provider codes.

/// Map a user-facing market symbol to the code the quote feed expects.
///
/// Bare numeric tickers are A-shares: those starting with `6` trade in
/// Shanghai and get a `0` prefix, everything else gets the Shenzhen `1`.
/// Exchange-prefixed symbols (`sh600519`, `sz000001`) have the prefix
/// rewritten the same way. US (`us_aapl`) and Hong Kong (`hk00700`)
/// symbols pass through in the form the feed already understands.
pub fn canonicalize(symbol: &str) -> String {
    let symbol = symbol.trim();

    let Some(first) = symbol.chars().next() else {
        return String::new();
    };

    if first.is_ascii_digit() {
        let market = if first == '6' { '0' } else { '1' };
        return format!("{}{}", market, symbol);
    }

    let lower = symbol.to_lowercase();
    if lower.contains("us_") {
        return symbol.to_uppercase();
    }
    if symbol.contains("hk") {
        return symbol.to_string();
    }

    lower.replacen("sz", "1", 1).replacen("sh", "0", 1)
}
