//! Polling loop command implementation.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use std::time::Duration;
use stockbar_core::DisplaySink;
use stockbar_engine::{
    shutdown_channel, ConfigWatcher, IntervalTimer, Scheduler, ShutdownTrigger, WatchlistHandle,
};
use stockbar_monitor::{wait_for_quit_key, LineSink, Palette, TerminalSink};
use tracing::{info, warn};

use crate::cli::RunArgs;

pub async fn run(args: RunArgs, config_path: &Path) -> Result<()> {
    // Stamp the file before loading it so an edit in between is picked up
    let handle = WatchlistHandle::new(Vec::new());
    let watcher = ConfigWatcher::new(config_path, handle.clone(), Duration::ZERO).await;

    let (config, stocks) = super::load(config_path)?;
    let provider = super::provider(&config)?;

    info!(
        "Watching {} stocks every {:?} via {}",
        stocks.len(),
        config.watch.interval(),
        provider.name()
    );

    handle.replace(stocks);
    let watcher = watcher.with_poll(config.watch.reload_poll());
    let (trigger, shutdown) = shutdown_channel();

    let sink: Box<dyn DisplaySink> = if args.plain {
        Box::new(LineSink::new(io::stdout()))
    } else {
        let palette = Palette::from_names(
            &config.display.rise_color,
            &config.display.fall_color,
            &config.display.flat_color,
        )?;
        let sink = TerminalSink::enter(config.app.name.clone(), palette)
            .context("Failed to initialize terminal")?;
        spawn_quit_keys(trigger.clone());
        Box::new(sink)
    };

    spawn_ctrl_c(trigger.clone());

    let watcher_task = tokio::spawn(watcher.run(trigger.subscribe()));

    let mut scheduler = Scheduler::new(
        provider,
        sink,
        Box::new(IntervalTimer::new(config.watch.interval())),
        &handle,
    );
    let stats = scheduler.run(shutdown).await;

    // Dropping the scheduler releases the terminal
    drop(scheduler);
    trigger.trigger();
    if let Err(e) = watcher_task.await {
        warn!("Configuration watcher ended abnormally: {}", e);
    }

    info!(
        "Stopped after {} cycles ({} failed)",
        stats.cycles, stats.failures
    );
    Ok(())
}

fn spawn_quit_keys(trigger: ShutdownTrigger) {
    tokio::task::spawn_blocking(move || {
        match wait_for_quit_key(Duration::from_millis(200), || trigger.is_triggered()) {
            Ok(true) => trigger.trigger(),
            Ok(false) => {}
            Err(e) => {
                warn!("Keyboard input unavailable: {}", e);
            }
        }
    });
}

fn spawn_ctrl_c(trigger: ShutdownTrigger) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.trigger();
        }
    });
}
