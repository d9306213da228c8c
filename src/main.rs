//! Stock ticker CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::PathBuf;
use stockbar_config::{load_config, LoggingConfig};
use stockbar_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging: command line overrides the [logging] section
    let settings = load_config(&cli.config)
        .map(|c| c.logging)
        .unwrap_or_else(|_| LoggingConfig::default());
    let log_level = match cli.log_level {
        Some(level) => level.as_str().to_string(),
        None => settings.level,
    };
    let json = cli.json_logs || settings.format == "json";
    let owns_terminal = matches!(&cli.command, Commands::Run(args) if !args.plain);
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| settings.file.map(PathBuf::from))
        .or_else(|| owns_terminal.then(|| std::env::temp_dir().join("stockbar.log")));
    let _log_guard = setup_logging(&log_level, json, log_file.as_deref());

    // Execute command
    match cli.command {
        Commands::Run(args) => cli::commands::run::run(args, &cli.config).await,
        Commands::Once => cli::commands::once::run(&cli.config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
        Commands::Init(args) => cli::commands::init::run(args, &cli.config).await,
    }
}
