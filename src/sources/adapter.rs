//! Source Adapter
//!
//! Cached `fetch_price` for one vendor.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::ReadThrough;
use crate::error::LookupResult;
use crate::models::PriceQuote;
use crate::sources::vendors::{format_for, VendorFormat};
use crate::sources::{Endpoint, RemoteLookup, SourceId};

/// Price lookup for a single vendor, memoized under `"<source>:<part>"`.
#[derive(Clone)]
pub struct SourceAdapter {
    source: SourceId,
    format: &'static dyn VendorFormat,
    remote: Arc<dyn RemoteLookup>,
    read_through: ReadThrough,
}

impl std::fmt::Debug for SourceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceAdapter")
            .field("source", &self.source)
            .field("remote", &self.remote)
            .finish()
    }
}

impl SourceAdapter {
    pub fn new(source: SourceId, remote: Arc<dyn RemoteLookup>, read_through: ReadThrough) -> Self {
        Self {
            source,
            format: format_for(source),
            remote,
            read_through,
        }
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    // == Lookup ==
    /// Cached, time-bounded quote for `part_number`.
    ///
    /// # Errors
    /// Returns the `LookupError` of the remote call or its normalization;
    /// nothing is cached in that case.
    pub async fn lookup(&self, part_number: &str) -> LookupResult<PriceQuote> {
        let key = self.source.cache_key(part_number);
        self.read_through
            .get_or_fetch(&key, || async {
                debug!(source = %self.source, part_number, "querying vendor");
                let payload = self
                    .remote
                    .fetch(Endpoint::Price(self.source), part_number)
                    .await?;
                self.format.normalize(payload)
            })
            .await
    }

    // == Fetch Price ==
    /// Like [`lookup`](Self::lookup), with failures logged and reported as
    /// absence.
    pub async fn fetch_price(&self, part_number: &str) -> Option<PriceQuote> {
        match self.lookup(part_number).await {
            Ok(quote) => Some(quote),
            Err(err) => {
                warn!(source = %self.source, part_number, error = %err, "source unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::new_shared_cache;
    use crate::error::LookupError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Debug)]
    struct FixedRemote {
        payload: Option<Value>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RemoteLookup for FixedRemote {
        async fn fetch(&self, _endpoint: Endpoint, part_number: &str) -> LookupResult<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.payload
                .clone()
                .ok_or_else(|| LookupError::Transport(format!("offline for {}", part_number)))
        }
    }

    fn adapter(payload: Option<Value>) -> (SourceAdapter, Arc<FixedRemote>) {
        let remote = Arc::new(FixedRemote {
            payload,
            calls: AtomicUsize::new(0),
        });
        let read_through = ReadThrough::new(
            new_shared_cache(Duration::from_secs(60)),
            Duration::from_secs(1),
        );
        (
            SourceAdapter::new(SourceId::Arrow, remote.clone(), read_through),
            remote,
        )
    }

    fn arrow_payload() -> Value {
        json!({"status": "success", "data": {"products": [
            {"price": "2.40", "stock": 9100, "delivery": "In Stock"}
        ]}})
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let (adapter, remote) = adapter(Some(arrow_payload()));

        let first = adapter.fetch_price("NE555D").await.unwrap();
        let second = adapter.fetch_price("NE555D").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.price, "$2.40");
        assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
        assert!(adapter
            .read_through
            .cache()
            .write()
            .await
            .has("Arrow:NE555D"));
    }

    #[tokio::test]
    async fn test_absence_is_retried() {
        let (adapter, remote) = adapter(None);

        assert!(adapter.fetch_price("NE555D").await.is_none());
        assert!(adapter.fetch_price("NE555D").await.is_none());

        assert_eq!(remote.calls.load(Ordering::SeqCst), 2);
        assert!(adapter.read_through.cache().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_absence() {
        let (adapter, _remote) = adapter(Some(json!({"unexpected": true})));

        assert!(matches!(
            adapter.lookup("NE555D").await,
            Err(LookupError::Malformed(_))
        ));
    }
}
