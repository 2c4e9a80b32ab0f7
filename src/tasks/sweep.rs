//! Expiry Sweep Task
//!
//! Background task that periodically removes expired summaries. Lookups
//! already refuse expired entries; the sweep reclaims memory for papers that
//! are never asked for again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SummaryCache;

/// Spawns a background task that periodically sweeps expired summaries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. The cache lock is held only for the sweep itself.
///
/// # Arguments
/// * `cache` - Shared summary cache handle
/// * `interval_secs` - Interval in seconds between sweeps (minimum 1)
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let sweep_handle = spawn_sweep_task(cache.clone(), 60);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: SummaryCache, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired summaries", removed);
            } else {
                debug!("Expiry sweep: no expired summaries found");
            }
        }
    })
}
