//! Cache Module
//!
//! Provides in-memory caching with per-entry TTL, lazy eviction, and the
//! read-through discipline the adapters use to memoize remote lookups.

mod coalesce;
mod entry;
mod read_through;
mod stats;
mod store;
mod value;


use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

// Re-export public types
pub use coalesce::InFlight;
pub use entry::{current_timestamp_ms, CacheEntry};
pub use read_through::ReadThrough;
pub use stats::CacheStats;
pub use store::TtlCache;
pub use value::{Cacheable, CachedValue};

// == Public Constants ==
/// TTL applied when none is configured: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// The cache instance shared by every adapter and the query service.
pub type SharedCache = Arc<RwLock<TtlCache<CachedValue>>>;

/// Creates an empty shared cache.
pub fn new_shared_cache(default_ttl: Duration) -> SharedCache {
    Arc::new(RwLock::new(TtlCache::new(default_ttl)))
}
