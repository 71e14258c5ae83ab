//! Risk Adapter
//!
//! Cached lifecycle / compliance lookup, memoized under `"risk:<part>"`.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::ReadThrough;
use crate::error::{LookupError, LookupResult};
use crate::insights::PartCatalog;
use crate::models::RiskRecord;
use crate::sources::{risk_cache_key, Endpoint, RemoteLookup};

#[derive(Debug, Clone)]
pub struct RiskAdapter {
    remote: Arc<dyn RemoteLookup>,
    read_through: ReadThrough,
    catalog: Arc<dyn PartCatalog>,
}

impl RiskAdapter {
    pub fn new(
        remote: Arc<dyn RemoteLookup>,
        read_through: ReadThrough,
        catalog: Arc<dyn PartCatalog>,
    ) -> Self {
        Self {
            remote,
            read_through,
            catalog,
        }
    }

    /// Cached, time-bounded risk record for `part_number`.
    ///
    /// # Errors
    /// Returns the `LookupError` of the remote call or payload parsing,
    /// including `NotFound` when the remote has no record.
    pub async fn lookup(&self, part_number: &str) -> LookupResult<RiskRecord> {
        let key = risk_cache_key(part_number);
        self.read_through
            .get_or_fetch(&key, || async {
                debug!(part_number, "querying risk");
                let payload = self.remote.fetch(Endpoint::Risk, part_number).await?;
                serde_json::from_value::<RiskRecord>(payload)
                    .map_err(LookupError::from)
            })
            .await
    }

    /// Risk record for `part_number`; never absent.
    ///
    /// Any failure, a remote "not found" included, falls back to the
    /// catalog and then to the all-unknown record. Neither fallback is
    /// cached.
    pub async fn fetch_risk(&self, part_number: &str) -> RiskRecord {
        match self.lookup(part_number).await {
            Ok(risk) => risk,
            Err(err) => {
                match &err {
                    LookupError::NotFound(_) => debug!(part_number, "no remote risk data"),
                    _ => warn!(part_number, error = %err, "risk unavailable"),
                }
                self.catalog
                    .risk(part_number)
                    .unwrap_or_else(RiskRecord::unknown)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::new_shared_cache;
    use crate::insights::SeedCatalog;
    use crate::sources::SimulatedRemote;
    use std::time::Duration;

    fn adapter(remote: SimulatedRemote) -> RiskAdapter {
        RiskAdapter::new(
            Arc::new(remote),
            ReadThrough::new(new_shared_cache(Duration::from_secs(60)), Duration::from_secs(1)),
            Arc::new(SeedCatalog),
        )
    }

    #[tokio::test]
    async fn test_known_part() {
        let adapter = adapter(SimulatedRemote::new().without_latency());

        let risk = adapter.fetch_risk("NE555D").await;

        assert_eq!(risk.lifecycle_status, "in production");
        assert!(adapter.read_through.cache().write().await.has("risk:NE555D"));
    }

    #[tokio::test]
    async fn test_unknown_part_is_all_unknown_and_uncached() {
        let adapter = adapter(SimulatedRemote::new().without_latency());

        let risk = adapter.fetch_risk("UNKNOWN-XYZ-1").await;

        assert!(risk.is_unknown());
        assert!(adapter.read_through.cache().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_uses_catalog() {
        let adapter = adapter(
            SimulatedRemote::new()
                .without_latency()
                .with_failure_rate(1.0),
        );

        assert_eq!(adapter.fetch_risk("LM317").await.overall_status, "normal");
        assert!(adapter.fetch_risk("UNKNOWN-XYZ-1").await.is_unknown());
    }

    #[derive(Debug)]
    struct NothingRemote;

    #[async_trait::async_trait]
    impl RemoteLookup for NothingRemote {
        async fn fetch(
            &self,
            _endpoint: Endpoint,
            part_number: &str,
        ) -> LookupResult<serde_json::Value> {
            Err(LookupError::NotFound(part_number.to_string()))
        }
    }

    #[tokio::test]
    async fn test_remote_not_found_uses_catalog() {
        let adapter = RiskAdapter::new(
            Arc::new(NothingRemote),
            ReadThrough::new(new_shared_cache(Duration::from_secs(60)), Duration::from_secs(1)),
            Arc::new(SeedCatalog),
        );

        assert_eq!(adapter.fetch_risk("1N4148").await.lifecycle_status, "in production");
        assert!(adapter.fetch_risk("UNKNOWN-XYZ-1").await.is_unknown());
        assert!(adapter.read_through.cache().read().await.is_empty());
    }
}
