//! Read-through Module
//!
//! The memoization discipline shared by every adapter: serve hits from the
//! cache, otherwise run one bounded remote lookup per key and store only
//! successful results.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{Cacheable, InFlight, SharedCache};
use crate::error::{LookupError, LookupResult};

// == Read Through ==
/// Cache front for remote lookups.
///
/// Absence and failure are never written to the cache, so the next call
/// after a failed lookup goes to the remote again.
#[derive(Debug, Clone)]
pub struct ReadThrough {
    cache: SharedCache,
    in_flight: Arc<InFlight>,
    timeout: Duration,
}

impl ReadThrough {
    /// # Arguments
    /// * `cache` - Shared cache the results are memoized in
    /// * `timeout` - Upper bound on a single remote lookup
    pub fn new(cache: SharedCache, timeout: Duration) -> Self {
        Self {
            cache,
            in_flight: Arc::new(InFlight::new()),
            timeout,
        }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // == Get Or Fetch ==
    /// Returns the cached value for `key`, or runs `fetch` and caches its
    /// success with the default TTL.
    ///
    /// Concurrent callers missing on the same key queue behind the first one
    /// and re-check the cache once it finishes.
    ///
    /// One deadline covers queueing and fetching together, so a caller
    /// stuck behind a hung lookup gives up at the same bound as the caller
    /// running it.
    ///
    /// # Errors
    /// Returns the error from `fetch`, or `LookupError::Timeout` when the
    /// value is not available within the configured bound.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, fetch: F) -> LookupResult<T>
    where
        T: Cacheable,
        F: FnOnce() -> Fut,
        Fut: Future<Output = LookupResult<T>>,
    {
        if let Some(hit) = self.cached::<T>(key).await {
            debug!(key, "cache hit");
            return Ok(hit);
        }

        let lookup = async {
            let _guard = self.in_flight.acquire(key).await;
            let settled = self.cache.read().await.peek(key).and_then(T::from_cached);
            if let Some(hit) = settled {
                debug!(key, "cache hit after waiting on in-flight lookup");
                return Ok(hit);
            }

            let value = fetch().await?;
            self.cache
                .write()
                .await
                .set(key, value.clone().into_cached(), None);
            debug!(key, "cached lookup result");

            Ok::<T, LookupError>(value)
        };

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(result) => result,
            Err(_) => {
                debug!(key, timeout = ?self.timeout, "lookup timed out");
                Err(LookupError::Timeout(self.timeout))
            }
        }
    }

    async fn cached<T: Cacheable>(&self, key: &str) -> Option<T> {
        // Write lock: an expired entry is evicted on read
        let value = self.cache.write().await.get(key)?;
        T::from_cached(value)
    }
}
