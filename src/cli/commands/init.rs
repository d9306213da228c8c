//! Starter configuration command.

use anyhow::{Context, Result};
use std::path::Path;
use stockbar_config::{AppConfig, WatchEntry};
use tracing::info;

use crate::cli::InitArgs;

pub async fn run(args: InitArgs, config_path: &Path) -> Result<()> {
    let config_path = args.target(config_path);
    if config_path.exists() && !args.force {
        anyhow::bail!(
            "{:?} already exists, pass --force to overwrite it",
            config_path
        );
    }

    let mut config = AppConfig::default();
    config.watch.stocks = vec![
        WatchEntry::Code("sh000001".to_string()),
        WatchEntry::Detailed {
            code: "600519".to_string(),
            alias: Some("Moutai".to_string()),
        },
        WatchEntry::Code("hk00700".to_string()),
        WatchEntry::Code("us_aapl".to_string()),
    ];

    if let Some(dir) = config_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }
    std::fs::write(config_path, config.to_toml()?)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    info!("Configuration written to {:?}", config_path);
    println!("Wrote {:?}", config_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbar_config::load_config;

    #[tokio::test]
    async fn test_init_writes_loadable_config_at_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("stockbar.toml");
        let args = InitArgs {
            force: false,
            path: Some(target.clone()),
        };

        run(args, Path::new("unused.toml")).await.unwrap();

        let config = load_config(&target).unwrap();
        assert_eq!(config.watch.stocks.len(), 4);
        assert!(!Path::new("unused.toml").exists());
    }

    #[tokio::test]
    async fn test_init_refuses_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("stockbar.toml");
        std::fs::write(&target, "# keep me\n").unwrap();

        let refused = run(
            InitArgs {
                force: false,
                path: Some(target.clone()),
            },
            Path::new("unused.toml"),
        )
        .await;
        assert!(refused.is_err());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "# keep me\n");

        run(
            InitArgs {
                force: true,
                path: Some(target.clone()),
            },
            Path::new("unused.toml"),
        )
        .await
        .unwrap();
        assert!(std::fs::read_to_string(&target).unwrap().contains("[watch]"));
    }
}
