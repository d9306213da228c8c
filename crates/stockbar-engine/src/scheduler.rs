//! The fetch, reconcile, render, wait loop.

use std::sync::Arc;
use stockbar_core::traits::{DisplaySink, QuoteProvider};
use stockbar_core::types::Stock;
use stockbar_core::{reconcile, render, StockbarResult};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::shutdown::Shutdown;
use crate::timer::Timer;
use crate::watchlist::WatchlistHandle;

/// Result of a single cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Quotes were fetched and the display refreshed
    Rendered { updated: usize, shown: usize },
    /// The cycle failed; nothing past the failing step ran
    Failed,
}

/// Counters for a scheduler run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Completed cycles, successful or not
    pub cycles: u64,
    pub failures: u64,
    /// Completed timer waits
    pub waits: u64,
}

/// Drives repeated polling cycles over the current watch-list.
///
/// The scheduler owns its stock list. A batch published through the
/// [`WatchlistHandle`] replaces it wholesale at the start of the next
/// cycle; a cycle already in flight finishes against the list it started
/// with.
pub struct Scheduler {
    provider: Arc<dyn QuoteProvider>,
    sink: Box<dyn DisplaySink>,
    timer: Box<dyn Timer>,
    watchlist: watch::Receiver<Arc<Vec<Stock>>>,
    /// Batch the current `stocks` were built from
    adopted: Arc<Vec<Stock>>,
    stocks: Vec<Stock>,
    stats: CycleStats,
}

impl Scheduler {
    /// Create a new scheduler.
    pub fn new(
        provider: Arc<dyn QuoteProvider>,
        sink: Box<dyn DisplaySink>,
        timer: Box<dyn Timer>,
        watchlist: &WatchlistHandle,
    ) -> Self {
        let mut watchlist = watchlist.subscribe();
        let adopted = watchlist.borrow_and_update().clone();
        let stocks = adopted.as_ref().clone();

        Self {
            provider,
            sink,
            timer,
            watchlist,
            adopted,
            stocks,
            stats: CycleStats::default(),
        }
    }

    /// Stocks as of the last completed cycle.
    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn stats(&self) -> CycleStats {
        self.stats
    }

    /// Pick up a newly published watch-list, if any.
    fn refresh_watchlist(&mut self) {
        // The receiver keeps the last published batch after every handle is
        // dropped, so compare batches instead of trusting the change flag.
        let latest = self.watchlist.borrow_and_update().clone();
        if Arc::ptr_eq(&latest, &self.adopted) {
            return;
        }
        self.stocks = latest.as_ref().clone();
        self.adopted = latest;
        info!(stocks = self.stocks.len(), "watch-list replaced");
    }

    async fn cycle(&mut self) -> StockbarResult<CycleOutcome> {
        let codes: Vec<String> = self.stocks.iter().map(|s| s.code().to_string()).collect();

        debug!(provider = self.provider.name(), codes = codes.len(), "call fetch");
        let snapshots = self.provider.fetch(&codes).await?;

        let updated = reconcile(&mut self.stocks, &snapshots);

        debug!(updated, "render");
        let shown = render(&self.stocks, self.sink.as_mut())?;

        Ok(CycleOutcome::Rendered { updated, shown })
    }

    /// Run one cycle. Failures are logged and reported, never returned.
    pub async fn tick(&mut self) -> CycleOutcome {
        self.refresh_watchlist();

        let outcome = match self.cycle().await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "cycle failed, keeping previous quotes");
                self.stats.failures += 1;
                CycleOutcome::Failed
            }
        };
        self.stats.cycles += 1;
        outcome
    }

    /// Cycle until `shutdown` fires.
    ///
    /// Every cycle, failed or not, is followed by one full timer wait.
    /// Shutdown interrupts either a pending fetch or a pending wait.
    pub async fn run(&mut self, mut shutdown: Shutdown) -> CycleStats {
        info!(
            provider = self.provider.name(),
            stocks = self.stocks.len(),
            "scheduler started"
        );

        loop {
            let ticked = tokio::select! {
                biased;
                _ = shutdown.cancelled() => false,
                _ = self.tick() => true,
            };
            if !ticked {
                break;
            }

            debug!("timer await");
            let waited = tokio::select! {
                biased;
                _ = shutdown.cancelled() => false,
                _ = self.timer.wait() => true,
            };
            if !waited {
                break;
            }
            self.stats.waits += 1;
        }

        info!(
            cycles = self.stats.cycles,
            failures = self.stats.failures,
            "scheduler stopped"
        );
        self.stats
    }
}
