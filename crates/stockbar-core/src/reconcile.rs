//! Merging provider snapshots into tracked stocks.

use crate::types::{Snapshot, Stock};

/// Apply provider snapshots to the stocks they belong to.
///
/// Each snapshot overwrites the first stock with the same code. Snapshots
/// for codes no longer on the watch-list are dropped, and stocks without a
/// snapshot keep their previous values.
///
/// # Returns
/// The number of snapshots that were applied
pub fn reconcile(stocks: &mut [Stock], snapshots: &[Snapshot]) -> usize {
    let mut applied = 0;

    for snapshot in snapshots {
        let Some(stock) = stocks.iter_mut().find(|s| s.code() == snapshot.code) else {
            continue;
        };
        stock.update(snapshot);
        applied += 1;
    }

    applied
}
