//! Validate configuration command.

use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match super::load(config_path) {
        Ok((config, stocks)) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Log level: {}", config.logging.level);
            println!("Refresh interval: {}ms", config.watch.interval_ms);
            println!("Provider: {}", config.provider.base_url);
            println!("Stocks: {}", stocks.len());
            for stock in &stocks {
                if stock.alias().is_empty() {
                    println!("  {:<12} -> {}", stock.symbol(), stock.code());
                } else {
                    println!("  {:<12} -> {} ({})", stock.symbol(), stock.code(), stock.alias());
                }
            }
        }
        Err(e) => {
            println!("Configuration error: {:#}", e);
            return Err(e);
        }
    }

    Ok(())
}
