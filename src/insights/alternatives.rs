//! Alternatives Adapter
//!
//! Cached substitute-part lookup, memoized under `"alt:<part>"`.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::ReadThrough;
use crate::error::{LookupError, LookupResult};
use crate::models::AlternativeRecord;
use crate::sources::{alternatives_cache_key, Endpoint, RemoteLookup};

#[derive(Debug, Clone)]
pub struct AlternativesAdapter {
    remote: Arc<dyn RemoteLookup>,
    read_through: ReadThrough,
}

impl AlternativesAdapter {
    pub fn new(remote: Arc<dyn RemoteLookup>, read_through: ReadThrough) -> Self {
        Self {
            remote,
            read_through,
        }
    }

    /// Cached, time-bounded substitutes for `part_number`. An empty list is
    /// a valid answer and is cached like any other.
    ///
    /// # Errors
    /// Returns the `LookupError` of the remote call or payload parsing.
    pub async fn lookup(&self, part_number: &str) -> LookupResult<Vec<AlternativeRecord>> {
        let key = alternatives_cache_key(part_number);
        self.read_through
            .get_or_fetch(&key, || async {
                debug!(part_number, "querying alternatives");
                let payload = self.remote.fetch(Endpoint::Alternatives, part_number).await?;
                serde_json::from_value::<Vec<AlternativeRecord>>(payload)
                    .map_err(LookupError::from)
            })
            .await
    }

    /// Like [`lookup`](Self::lookup), with failures logged and reported as
    /// absence. The aggregator decides what replaces an absent list.
    pub async fn fetch_alternatives(&self, part_number: &str) -> Option<Vec<AlternativeRecord>> {
        match self.lookup(part_number).await {
            Ok(alternatives) => Some(alternatives),
            Err(err) => {
                warn!(part_number, error = %err, "alternatives unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::new_shared_cache;
    use crate::models::RelationKind;
    use crate::sources::SimulatedRemote;
    use std::time::Duration;

    fn adapter(remote: SimulatedRemote) -> AlternativesAdapter {
        AlternativesAdapter::new(
            Arc::new(remote),
            ReadThrough::new(new_shared_cache(Duration::from_secs(60)), Duration::from_secs(1)),
        )
    }

    #[tokio::test]
    async fn test_fetch_known_part() {
        let adapter = adapter(SimulatedRemote::new().without_latency());

        let alternatives = adapter.fetch_alternatives("LM7805").await.unwrap();

        assert_eq!(alternatives[0].model, "LM7805CT");
        assert_eq!(alternatives[0].relation_kind, RelationKind::Direct);
        assert!(adapter.read_through.cache().write().await.has("alt:LM7805"));
    }

    #[tokio::test]
    async fn test_unknown_part_is_empty_not_absent() {
        let adapter = adapter(SimulatedRemote::new().without_latency());

        let alternatives = adapter.fetch_alternatives("UNKNOWN-XYZ-1").await;
        assert_eq!(alternatives, Some(vec![]));
    }

    #[tokio::test]
    async fn test_failure_is_absent_and_uncached() {
        let adapter = adapter(
            SimulatedRemote::new()
                .without_latency()
                .with_failure_rate(1.0),
        );

        assert!(adapter.fetch_alternatives("NE555D").await.is_none());
        assert!(adapter.read_through.cache().read().await.is_empty());
    }
}
