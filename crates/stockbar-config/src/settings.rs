//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use stockbar_core::ConfigurationError;

use crate::watchlist::WatchEntry;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub watch: WatchSettings,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Reject values the runtime cannot work with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let positive = [
            ("watch.interval_ms", self.watch.interval_ms),
            ("watch.reload_poll_ms", self.watch.reload_poll_ms),
            ("provider.timeout_ms", self.provider.timeout_ms),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(ConfigurationError::InvalidValue(format!(
                    "{} must be greater than zero",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Render as a TOML document.
    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string_pretty(self).map_err(|e| ConfigurationError::InvalidValue(e.to_string()))
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stockbar".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Polling and watch-list settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchSettings {
    /// Pause between two fetch cycles
    pub interval_ms: u64,
    /// How often the configuration file is checked for edits
    pub reload_poll_ms: u64,
    pub stocks: Vec<WatchEntry>,
}

impl WatchSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn reload_poll(&self) -> Duration {
        Duration::from_millis(self.reload_poll_ms)
    }
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            interval_ms: 10_000,
            reload_poll_ms: 2_000,
            stocks: Vec::new(),
        }
    }
}

/// Quote provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl ProviderSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "http://api.money.126.net/data/feed".to_string(),
            timeout_ms: 5_000,
        }
    }
}

/// Terminal colours, by ratatui colour name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub rise_color: String,
    pub fall_color: String,
    pub flat_color: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            rise_color: "red".to_string(),
            fall_color: "green".to_string(),
            flat_color: "gray".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_durations() {
        let watch = WatchSettings::default();
        assert_eq!(watch.interval(), Duration::from_secs(10));
        assert_eq!(watch.reload_poll(), Duration::from_secs(2));
        assert_eq!(ProviderSettings::default().timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_to_toml_round_trips_through_loader() {
        let mut config = AppConfig::default();
        config.watch.stocks = vec![
            WatchEntry::Code("sh600519".to_string()),
            WatchEntry::Detailed {
                code: "hk00700".to_string(),
                alias: Some("Tencent".to_string()),
            },
        ];

        let text = config.to_toml().unwrap();
        let loaded = crate::load_config_str(&text).unwrap();

        assert_eq!(loaded.watch.stocks, config.watch.stocks);
        assert_eq!(loaded.display.fall_color, "green");
    }
}
