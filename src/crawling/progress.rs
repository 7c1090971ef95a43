//! Per-item progress reporting.

use tracing::info;

/// Observer notified after each processed detail address.
pub trait ProgressObserver: Send + Sync {
    /// `completed` items out of `total` have been processed (successfully
    /// or not).
    fn on_item(&self, completed: usize, total: usize);
}

/// Logs progress through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_item(&self, completed: usize, total: usize) {
        info!("processed {}/{} postings", completed, total);
    }
}
