//! CLI command implementations.

pub mod init;
pub mod once;
pub mod run;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use stockbar_config::{load_config, load_watchlist, AppConfig};
use stockbar_core::{QuoteProvider, Stock};
use stockbar_data::{NeteaseConfig, NeteaseProvider};

/// Load the configuration and materialize its watch-list.
fn load(config_path: &Path) -> Result<(AppConfig, Vec<Stock>)> {
    let config = load_config(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
    let stocks = load_watchlist(&config.watch.stocks).context("Invalid watch-list")?;
    Ok((config, stocks))
}

fn provider(config: &AppConfig) -> Result<Arc<dyn QuoteProvider>> {
    let provider = NeteaseProvider::new(NeteaseConfig::new(
        config.provider.base_url.clone(),
        config.provider.timeout(),
    ))
    .context("Failed to create quote provider")?;
    Ok(Arc::new(provider))
}
