//! Single fetch command implementation.

use anyhow::Result;
use std::io;
use std::path::Path;
use stockbar_engine::{CycleOutcome, IntervalTimer, Scheduler, WatchlistHandle};
use stockbar_monitor::LineSink;

pub async fn run(config_path: &Path) -> Result<()> {
    let (config, stocks) = super::load(config_path)?;
    let provider = super::provider(&config)?;

    let handle = WatchlistHandle::new(stocks);
    let mut scheduler = Scheduler::new(
        provider,
        Box::new(LineSink::new(io::stdout())),
        Box::new(IntervalTimer::new(config.watch.interval())),
        &handle,
    );

    match scheduler.tick().await {
        CycleOutcome::Rendered { .. } => Ok(()),
        CycleOutcome::Failed => anyhow::bail!("Fetching quotes failed, see the log for details"),
    }
}
