//! Configuration management.

mod settings;
mod watchlist;

pub use settings::{
    AppConfig, AppSettings, DisplaySettings, LoggingConfig, ProviderSettings, WatchSettings,
};
pub use watchlist::{load_watchlist, WatchEntry};

use config::{Config, Environment, File, FileFormat};
use std::path::Path;
use stockbar_core::ConfigurationError;

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigurationError> {
    let builder = Config::builder().add_source(File::from(path).required(true));
    finish(builder)
}

/// Load configuration from TOML text and environment.
pub fn load_config_str(toml: &str) -> Result<AppConfig, ConfigurationError> {
    let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
    finish(builder)
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<AppConfig, ConfigurationError> {
    let config = builder
        .add_source(
            Environment::with_prefix("STOCKBAR")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| ConfigurationError::Load(e.to_string()))?;

    let app: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigurationError::Load(e.to_string()))?;
    app.validate()?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() {
        let config = load_config_str(
            r#"
            [app]
            name = "desk"

            [logging]
            level = "debug"

            [watch]
            interval_ms = 3000
            stocks = ["sh600519", { code = "hk00700", alias = "Tencent" }]

            [provider]
            timeout_ms = 1500

            [display]
            rise_color = "green"
            fall_color = "red"
            "#,
        )
        .unwrap();

        assert_eq!(config.app.name, "desk");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.watch.interval_ms, 3000);
        assert_eq!(config.watch.reload_poll_ms, 2000);
        assert_eq!(config.provider.timeout_ms, 1500);
        assert_eq!(config.display.rise_color, "green");
        assert_eq!(
            config.watch.stocks,
            vec![
                WatchEntry::Code("sh600519".to_string()),
                WatchEntry::Detailed {
                    code: "hk00700".to_string(),
                    alias: Some("Tencent".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = load_config_str("").unwrap();

        assert_eq!(config.watch.interval_ms, 10_000);
        assert!(config.watch.stocks.is_empty());
        assert_eq!(config.provider.base_url, ProviderSettings::default().base_url);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = load_config_str("[watch]\ninterval_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue(_)));
    }

    #[test]
    fn test_malformed_entry_survives_deserialization() {
        let config = load_config_str("[watch]\nstocks = [\"600519\", 42]\n").unwrap();

        assert!(matches!(config.watch.stocks[1], WatchEntry::Malformed(_)));
        assert!(load_watchlist(&config.watch.stocks).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigurationError::Load(_)));
    }
}
