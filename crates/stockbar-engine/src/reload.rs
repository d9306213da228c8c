//! Watch-list reloading on configuration edits.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use stockbar_config::{load_config, load_watchlist};
use stockbar_core::ConfigurationError;
use tracing::{debug, error, info};

use crate::shutdown::Shutdown;
use crate::watchlist::WatchlistHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl FileStamp {
    async fn read(path: &Path) -> Option<Self> {
        let meta = tokio::fs::metadata(path).await.ok()?;
        Some(Self {
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Polls the configuration file and republishes the watch-list when it
/// changes.
///
/// A reload that fails validation is logged and dropped; the last good
/// watch-list stays active.
pub struct ConfigWatcher {
    path: PathBuf,
    handle: WatchlistHandle,
    poll: Duration,
    stamp: Option<FileStamp>,
}

impl ConfigWatcher {
    /// Create a watcher. The file's current state counts as already loaded.
    pub async fn new(path: impl Into<PathBuf>, handle: WatchlistHandle, poll: Duration) -> Self {
        let path = path.into();
        let stamp = FileStamp::read(&path).await;
        Self {
            path,
            handle,
            poll,
            stamp,
        }
    }

    /// Change the poll period.
    pub fn with_poll(mut self, poll: Duration) -> Self {
        self.poll = poll;
        self
    }

    /// Re-read the file on the blocking pool and publish its watch-list.
    ///
    /// # Returns
    /// The number of stocks published
    pub async fn reload(&self) -> Result<usize, ConfigurationError> {
        let path = self.path.clone();
        let handle = self.handle.clone();
        tokio::task::spawn_blocking(move || publish(&path, &handle))
            .await
            .map_err(|e| ConfigurationError::Load(format!("reload task failed: {e}")))?
    }

    /// Reload if the file changed since the last check.
    ///
    /// # Returns
    /// `true` when a change was detected, whether or not it loaded
    pub async fn poll_once(&mut self) -> bool {
        let stamp = FileStamp::read(&self.path).await;
        if stamp == self.stamp {
            return false;
        }
        self.stamp = stamp;

        match self.reload().await {
            Ok(count) => info!(path = %self.path.display(), stocks = count, "configuration reloaded"),
            Err(e) => error!(
                path = %self.path.display(),
                error = %e,
                kept = self.handle.current().len(),
                "configuration rejected, keeping previous watch-list"
            ),
        }
        true
    }

    /// Poll until `shutdown` fires.
    pub async fn run(mut self, mut shutdown: Shutdown) {
        debug!(path = %self.path.display(), "watching configuration");
        loop {
            let proceed = tokio::select! {
                biased;
                _ = shutdown.cancelled() => false,
                _ = tokio::time::sleep(self.poll) => true,
            };
            if !proceed {
                break;
            }
            self.poll_once().await;
        }
    }
}

fn publish(path: &Path, handle: &WatchlistHandle) -> Result<usize, ConfigurationError> {
    let config = load_config(path)?;
    let stocks = load_watchlist(&config.watch.stocks)?;
    let count = stocks.len();
    handle.replace(stocks);
    Ok(count)
}
