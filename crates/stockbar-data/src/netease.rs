//! Netease money feed client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use stockbar_core::error::ProviderError;
use stockbar_core::traits::QuoteProvider;
use stockbar_core::types::Snapshot;
use tracing::debug;

/// Netease feed configuration.
#[derive(Debug, Clone)]
pub struct NeteaseConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl NeteaseConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Feed URL for a batch of codes.
    pub fn feed_url(&self, codes: &[String]) -> String {
        format!(
            "{}/{},money.api",
            self.base_url.trim_end_matches('/'),
            codes.join(",")
        )
    }
}

/// Netease feed record.
#[derive(Debug, Deserialize)]
struct NeteaseQuote {
    code: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    updown: f64,
    #[serde(default)]
    percent: f64,
    #[serde(default)]
    high: f64,
    #[serde(default)]
    low: f64,
    #[serde(default)]
    open: f64,
    #[serde(default)]
    yestclose: f64,
}

impl From<NeteaseQuote> for Snapshot {
    fn from(q: NeteaseQuote) -> Self {
        Snapshot {
            code: q.code,
            name: q.name,
            price: q.price,
            updown: q.updown,
            percent: q.percent,
            high: q.high,
            low: q.low,
            open: q.open,
            yestclose: q.yestclose,
        }
    }
}

/// Strip the `callback( ... );` wrapper and decode the quote map.
fn parse_feed(body: &str) -> Result<Vec<Snapshot>, ProviderError> {
    let start = body
        .find('(')
        .ok_or_else(|| ProviderError::Parse("missing callback wrapper".into()))?;
    let end = body
        .rfind(')')
        .filter(|end| *end > start)
        .ok_or_else(|| ProviderError::Parse("unterminated callback wrapper".into()))?;

    let quotes: HashMap<String, NeteaseQuote> = serde_json::from_str(&body[start + 1..end])
        .map_err(|e| ProviderError::Parse(e.to_string()))?;

    Ok(quotes.into_values().map(Snapshot::from).collect())
}

/// Netease quote provider.
pub struct NeteaseProvider {
    config: NeteaseConfig,
    client: Client,
}

impl NeteaseProvider {
    /// Create a new Netease client.
    pub fn new(config: NeteaseConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl QuoteProvider for NeteaseProvider {
    async fn fetch(&self, codes: &[String]) -> Result<Vec<Snapshot>, ProviderError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.config.feed_url(codes);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let snapshots = parse_feed(&body)?;
        debug!("received {} quotes for {} codes", snapshots.len(), codes.len());
        Ok(snapshots)
    }

    fn name(&self) -> &str {
        "Netease"
    }
}
