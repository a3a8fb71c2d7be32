//! Cache Module
//!
//! In-memory cache of response bodies with periodic time-based eviction.

mod entry;
mod response_cache;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use response_cache::ResponseCache;
pub use store::CacheStore;

// == Public Constants ==
/// Default time-to-live for cached responses
pub const DEFAULT_TTL_SECS: u64 = 5;
