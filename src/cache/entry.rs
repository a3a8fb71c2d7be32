//! Cache Entry Module
//!
//! Defines the structure for individual cached response bodies.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body together with the moment it was stored.
///
/// The payload is opaque to the cache and shared behind an `Arc` so that
/// reads hand out cheap clones instead of copying the body.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    value: Arc<[u8]>,
    /// Insertion timestamp, fixed for the lifetime of the entry
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: impl Into<Arc<[u8]>>) -> Self {
        Self::with_timestamp(value, Instant::now())
    }

    /// Creates a new entry with an explicit insertion timestamp.
    pub fn with_timestamp(value: impl Into<Arc<[u8]>>, created_at: Instant) -> Self {
        Self {
            value: value.into(),
            created_at,
        }
    }

    /// Returns a shared handle to the payload.
    pub fn value(&self) -> Arc<[u8]> {
        Arc::clone(&self.value)
    }

    // == Is Stale ==
    /// Checks whether the entry is older than `ttl` as seen from `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl` is not
    /// stale yet. Only strictly older entries qualify for eviction.
    pub fn is_stale(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }
}
