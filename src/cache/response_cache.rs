//! Response Cache Module
//!
//! Thread-safe handle around [`CacheStore`] that owns the background sweep.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::tasks::spawn_sweep_task;

// == Response Cache ==
/// Time-expiring cache of raw response bodies keyed by request URL.
///
/// Reads share the lock with each other; `add` and the background sweep
/// take it exclusively. Reads never look at entry age, so a stale entry is
/// served until the next sweep removes it.
///
/// Constructing a cache starts its sweep task. The task stops when
/// [`stop`](Self::stop) is called or when the cache is dropped.
#[derive(Debug)]
pub struct ResponseCache {
    /// Shared storage, also reachable (weakly) from the sweep task
    store: Arc<RwLock<CacheStore>>,
    /// Entry lifetime and sweep period
    ttl: Duration,
    /// One-way stop flag observed by the sweep task
    shutdown: watch::Sender<bool>,
    /// Handle of the sweep task
    sweeper: JoinHandle<()>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let sweeper = spawn_sweep_task(Arc::downgrade(&store), ttl, shutdown_rx);

        Self {
            store,
            ttl,
            shutdown,
            sweeper,
        }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and its age.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Arc<[u8]>>) {
        let key = key.into();
        debug!(key = %key, "caching response");
        self.write().add(key, value);
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Arc<[u8]>> {
        self.read().get(key)
    }

    // == Stop ==
    /// Asks the sweep task to terminate.
    ///
    /// Returns without waiting for the task to exit. Calling it again is a
    /// no-op. A stopped cache keeps serving `add`/`get` but nothing is
    /// evicted any more.
    pub fn stop(&self) {
        if self.shutdown.send_replace(true) {
            debug!("Cache sweep already stopped");
        } else {
            info!("Stopping cache sweep task");
        }
    }

    /// Returns true once [`stop`](Self::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Returns true once the sweep task has actually exited.
    pub fn is_sweeper_finished(&self) -> bool {
        self.sweeper.is_finished()
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Entries are plain data, a panic elsewhere cannot leave them half-written
    fn read(&self) -> RwLockReadGuard<'_, CacheStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const TTL: Duration = Duration::from_secs(2);

    #[tokio::test(start_paused = true)]
    async fn test_add_then_get() {
        let cache = ResponseCache::new(TTL);

        cache.add("u1", b"payload".to_vec());

        assert_eq!(cache.get("u1").as_deref(), Some(&b"payload"[..]));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_missing_key() {
        let cache = ResponseCache::new(TTL);
        assert!(cache.get("nope").is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_readd_replaces_value() {
        let cache = ResponseCache::new(TTL);

        cache.add("u1", b"first".to_vec());
        cache.add("u1", b"second".to_vec());

        assert_eq!(cache.get("u1").as_deref(), Some(&b"second"[..]));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_survives_first_sweep_after_insert() {
        let cache = ResponseCache::new(TTL);
        cache.add("u1", b"payload".to_vec());

        // Sweep at 2s sees an age of exactly the TTL and keeps the entry
        tokio::time::sleep(Duration::from_secs(3)).await;

        assert!(cache.get("u1").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_evicted_after_two_sweeps() {
        let cache = ResponseCache::new(TTL);
        cache.add("u1", b"payload".to_vec());
        assert_eq!(cache.get("u1").as_deref(), Some(&b"payload"[..]));

        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(cache.get("u1").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refreshed_entry_outlives_original_deadline() {
        let cache = ResponseCache::new(TTL);
        cache.add("u1", b"old".to_vec());

        tokio::time::sleep(Duration::from_secs(3)).await;
        cache.add("u1", b"new".to_vec());

        // Original insert would be gone by the 4s sweep
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(cache.get("u1").as_deref(), Some(&b"new"[..]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_twice_is_harmless() {
        let cache = ResponseCache::new(TTL);

        cache.stop();
        cache.stop();

        assert!(cache.is_stopped());
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(cache.is_sweeper_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_eviction_after_stop() {
        let cache = ResponseCache::new(TTL);
        cache.stop();

        cache.add("u1", b"payload".to_vec());
        tokio::time::sleep(Duration::from_secs(20)).await;

        assert_eq!(cache.get("u1").as_deref(), Some(&b"payload"[..]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_from_another_task() {
        let cache = Arc::new(ResponseCache::new(TTL));

        let remote = Arc::clone(&cache);
        tokio::spawn(async move { remote.stop() }).await.unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(cache.is_stopped());
        assert!(cache.is_sweeper_finished());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_on_distinct_keys() {
        let cache = Arc::new(ResponseCache::new(Duration::from_secs(60)));

        thread::scope(|scope| {
            for t in 0..8 {
                let cache = &cache;
                scope.spawn(move || {
                    for i in 0..200 {
                        let key = format!("https://example.test/{t}/{i}");
                        let value = key.repeat(4).into_bytes();
                        cache.add(key.clone(), value.clone());
                        assert_eq!(cache.get(&key).as_deref(), Some(&value[..]));
                    }
                });
            }
        });

        assert_eq!(cache.len(), 8 * 200);
        for t in 0..8 {
            for i in 0..200 {
                let key = format!("https://example.test/{t}/{i}");
                let expected = key.repeat(4).into_bytes();
                assert_eq!(cache.get(&key).as_deref(), Some(&expected[..]));
            }
        }
        cache.stop();
    }
}
