//! Polling scheduler and watch-list reloading.

mod reload;
mod scheduler;
mod shutdown;
mod timer;
mod watchlist;

pub use reload::ConfigWatcher;
pub use scheduler::{CycleOutcome, CycleStats, Scheduler};
pub use shutdown::{shutdown_channel, Shutdown, ShutdownTrigger};
pub use timer::{IntervalTimer, Timer};
pub use watchlist::WatchlistHandle;
