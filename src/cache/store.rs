//! Cache Store Module
//!
//! Plain key-value storage for response bodies. Locking and the background
//! sweep live one layer up, in [`ResponseCache`](crate::cache::ResponseCache).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Mapping from request key to the cached payload.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores `value` under `key`, stamping the current time.
    ///
    /// An existing entry for the key is replaced entirely, including its age.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Arc<[u8]>>) {
        self.insert_entry(key.into(), CacheEntry::new(value));
    }

    /// Stores a prepared entry, replacing whatever was there.
    pub fn insert_entry(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Retrieves the payload for `key`.
    ///
    /// Age is not consulted here: an entry stays readable until a sweep
    /// removes it.
    pub fn get(&self, key: &str) -> Option<Arc<[u8]>> {
        self.entries.get(key).map(CacheEntry::value)
    }

    // == Remove Stale ==
    /// Removes every entry older than `ttl` relative to `now`.
    ///
    /// `now` is taken once by the caller so that a whole pass judges every
    /// entry against the same instant. Returns the number of entries removed.
    pub fn remove_stale(&mut self, now: Instant, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(now, ttl));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
