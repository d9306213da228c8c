//! Shared, swappable watch-list.

use std::sync::Arc;
use stockbar_core::Stock;
use tokio::sync::watch;

/// Publishes freshly loaded stock batches to the scheduler.
///
/// Each replacement is a single swap of an immutable batch; readers never
/// see a half-written list.
#[derive(Clone, Debug)]
pub struct WatchlistHandle {
    tx: Arc<watch::Sender<Arc<Vec<Stock>>>>,
}

impl WatchlistHandle {
    pub fn new(stocks: Vec<Stock>) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(stocks));
        Self { tx: Arc::new(tx) }
    }

    /// Swap in a new batch.
    pub fn replace(&self, stocks: Vec<Stock>) {
        self.tx.send_replace(Arc::new(stocks));
    }

    /// Latest published batch.
    pub fn current(&self) -> Arc<Vec<Stock>> {
        self.tx.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Stock>>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_swaps_whole_batch() {
        let handle = WatchlistHandle::new(vec![Stock::new("600519", None)]);
        let before = handle.current();

        handle.replace(vec![Stock::new("000001", None), Stock::new("hk00700", None)]);

        assert_eq!(before.len(), 1);
        assert_eq!(before[0].symbol(), "600519");
        let after = handle.current();
        assert_eq!(after.len(), 2);
        assert_eq!(after[0].symbol(), "000001");
    }

    #[test]
    fn test_subscriber_sees_change() {
        let handle = WatchlistHandle::new(Vec::new());
        let mut rx = handle.subscribe();
        assert!(!rx.has_changed().unwrap());

        handle.clone().replace(vec![Stock::new("600519", None)]);

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
    }
}
