//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "stockbar")]
#[command(author, version, about = "Terminal stock ticker for a configured watch-list")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", env = "STOCKBAR_CONFIG")]
    pub config: PathBuf,

    /// Log level (defaults to the [logging] section)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// Write logs to this file instead of stdout
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll quotes and keep the display updated until quit
    Run(RunArgs),
    /// Fetch and print quotes once
    Once,
    /// Validate configuration
    ValidateConfig,
    /// Write a starter configuration file
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Print one line per refresh instead of the full-screen dashboard
    #[arg(long)]
    pub plain: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,

    /// Where to write the file (defaults to --config)
    pub path: Option<PathBuf>,
}

impl InitArgs {
    /// File to write: the positional path, else the `--config` path.
    pub fn target<'a>(&'a self, config: &'a Path) -> &'a Path {
        self.path.as_deref().unwrap_or(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_args(argv: &[&str]) -> (Cli, InitArgs) {
        let mut cli = Cli::try_parse_from(argv).unwrap();
        let command = std::mem::replace(&mut cli.command, Commands::Once);
        match command {
            Commands::Init(args) => (cli, args),
            _ => panic!("expected init"),
        }
    }

    #[test]
    fn test_init_positional_path() {
        let (cli, args) = init_args(&["stockbar", "init", "--force", "out/stockbar.toml"]);

        assert!(args.force);
        assert_eq!(args.target(&cli.config), Path::new("out/stockbar.toml"));
    }

    #[test]
    fn test_init_falls_back_to_config_flag() {
        let (cli, args) = init_args(&["stockbar", "--config", "mine.toml", "init"]);

        assert!(!args.force);
        assert!(args.path.is_none());
        assert_eq!(args.target(&cli.config), Path::new("mine.toml"));
    }
}
