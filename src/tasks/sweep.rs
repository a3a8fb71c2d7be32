//! Cache Sweep Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::{PoisonError, RwLock, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Lower bound for the tick period; Tokio rejects a zero interval.
const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

/// Spawns a background task that sweeps stale entries out of `store`.
///
/// The task wakes once per `ttl` and removes every entry older than `ttl`.
/// Between ticks it waits on both the timer and `shutdown`, so a stop
/// request is seen without polling. It exits when:
/// - `shutdown` flips to `true`,
/// - every sender of `shutdown` has been dropped, or
/// - `store` can no longer be upgraded because its owner is gone.
///
/// The task only holds a weak reference; the store's lifetime belongs to
/// whoever created it.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new()));
/// let (stop_tx, stop_rx) = watch::channel(false);
/// let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_secs(5), stop_rx);
/// // Later:
/// stop_tx.send_replace(true);
/// ```
pub fn spawn_sweep_task(
    store: Weak<RwLock<CacheStore>>,
    ttl: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let period = ttl.max(MIN_SWEEP_PERIOD);

    tokio::spawn(async move {
        info!("Starting cache sweep task with interval of {:?}", period);

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    // Err: the owning cache was dropped
                    if changed.is_err() || *shutdown.borrow_and_update() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    let Some(store) = store.upgrade() else {
                        break;
                    };
                    let removed = sweep(&store, ttl);

                    if removed > 0 {
                        info!("Cache sweep: removed {} stale entries", removed);
                    } else {
                        debug!("Cache sweep: no stale entries found");
                    }
                }
            }
        }

        info!("Cache sweep task stopped");
    })
}

/// Runs one pass over the store, judging every entry against one instant.
fn sweep(store: &RwLock<CacheStore>, ttl: Duration) -> usize {
    let now = Instant::now();
    let mut guard = store.write().unwrap_or_else(PoisonError::into_inner);
    guard.remove_stale(now, ttl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_store() -> Arc<RwLock<CacheStore>> {
        Arc::new(RwLock::new(CacheStore::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_removes_stale_entries() {
        let store = new_store();
        store.write().unwrap().add("expire_soon", b"value".to_vec());

        let (_stop_tx, stop_rx) = watch::channel(false);
        let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_secs(1), stop_rx);

        // Ticks at 1s (age == ttl, kept) and 2s (removed)
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert!(
            store.read().unwrap().get("expire_soon").is_none(),
            "Stale entry should have been swept"
        );
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_preserves_fresh_entries() {
        let store = new_store();
        let (_stop_tx, stop_rx) = watch::channel(false);
        let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_secs(10), stop_rx);

        tokio::time::sleep(Duration::from_secs(15)).await;
        store.write().unwrap().add("recent", b"value".to_vec());

        // Next tick at 20s sees an age of 5s
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert_eq!(
            store.read().unwrap().get("recent").as_deref(),
            Some(&b"value"[..])
        );
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_exits_on_shutdown_signal() {
        let store = new_store();
        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_secs(1), stop_rx);

        stop_tx.send_replace(true);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(handle.is_finished(), "Task should exit after shutdown");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_exits_when_sender_dropped() {
        let store = new_store();
        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_secs(1), stop_rx);

        drop(stop_tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_exits_when_store_dropped() {
        let store = new_store();
        let (_stop_tx, stop_rx) = watch::channel(false);
        let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_secs(1), stop_rx);

        drop(store);
        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_ttl_does_not_panic() {
        let store = new_store();
        store.write().unwrap().add("k", b"v".to_vec());

        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::ZERO, stop_rx);

        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(store.read().unwrap().is_empty());

        stop_tx.send_replace(true);
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(handle.is_finished());
    }
}
