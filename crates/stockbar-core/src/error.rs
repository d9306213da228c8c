//! Error types for the stock ticker.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum StockbarError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Watch-list and settings errors.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error(
        "malformed watch-list entry #{index}: {entry}; expected a code string or a \
         {{ code, alias }} table, see the [watch] section of config/default.toml"
    )]
    MalformedEntry { index: usize, entry: String },

    #[error("failed to load configuration: {0}")]
    Load(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Quote provider errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Display sink errors.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Sink error: {0}")]
    Sink(String),
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err.to_string())
    }
}

/// Result type alias for ticker operations.
pub type StockbarResult<T> = Result<T, StockbarError>;
