//! Query Service
//!
//! Boundary in front of the [`Aggregator`]: validates part numbers, turns
//! orchestration faults into a single error, and owns cache invalidation
//! and introspection.

use std::sync::Arc;

use tracing::{error, info};

use crate::cache::{new_shared_cache, CacheStats, ReadThrough, SharedCache};
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::insights::{AlternativesAdapter, PartCatalog, RiskAdapter, SeedCatalog};
use crate::models::{AggregatedResult, CacheHealth, DocsResponse, HealthResponse, PartNumber};
use crate::services::Aggregator;
use crate::sources::{cache_keys_for, FallbackQuoter, RemoteLookup, SourceId, SourceRegistry};

/// Part lookup service.
///
/// Owns the shared cache for its whole lifetime; every adapter it builds
/// memoizes into that one instance.
#[derive(Debug, Clone)]
pub struct QueryService {
    aggregator: Arc<Aggregator>,
    cache: SharedCache,
    sources: Vec<SourceId>,
}

impl QueryService {
    /// Builds the service with the seed catalog as fallback data.
    pub fn new(config: &Config, remote: Arc<dyn RemoteLookup>) -> Self {
        Self::with_catalog(config, remote, Arc::new(SeedCatalog))
    }

    /// Builds the service with a custom fallback catalog.
    pub fn with_catalog(
        config: &Config,
        remote: Arc<dyn RemoteLookup>,
        catalog: Arc<dyn PartCatalog>,
    ) -> Self {
        let cache = new_shared_cache(config.default_ttl());
        let read_through = ReadThrough::new(cache.clone(), config.lookup_timeout());

        let registry = SourceRegistry::new(&config.sources, remote.clone(), read_through.clone());
        let sources = registry.ids();
        let aggregator = Aggregator::new(
            registry,
            AlternativesAdapter::new(remote.clone(), read_through.clone()),
            RiskAdapter::new(remote, read_through, catalog.clone()),
            catalog,
            FallbackQuoter::new(config.fallback_enabled),
        );

        Self {
            aggregator: Arc::new(aggregator),
            cache,
            sources,
        }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    /// Configured sources, in comparison order.
    pub fn sources(&self) -> &[SourceId] {
        &self.sources
    }

    // == Query Part ==
    /// Aggregates everything known about `raw_part_number`.
    ///
    /// The aggregation runs in its own task so that a panic anywhere in the
    /// orchestration is contained and reported as one fault.
    ///
    /// # Errors
    /// - `ServiceError::MalformedRequest` for an empty or invalid part number
    /// - `ServiceError::AggregationFault` if the aggregation task fails
    pub async fn query_part(&self, raw_part_number: &str) -> Result<AggregatedResult> {
        let part_number = PartNumber::parse(raw_part_number)?;
        let aggregator = self.aggregator.clone();

        let task_part = part_number.clone();
        let result = tokio::spawn(async move { aggregator.aggregate(&task_part).await })
            .await
            .map_err(|err| {
                error!(part_number = %part_number, error = %err, "aggregation failed");
                ServiceError::AggregationFault(err.to_string())
            })?;

        info!(
            part_number = %part_number,
            prices = result.prices.len(),
            alternatives = result.alternatives.len(),
            "part query complete"
        );
        Ok(result)
    }

    // == Invalidate ==
    /// Drops every cached lookup for one part number: all price sources,
    /// alternatives and risk. Entries for other parts are untouched.
    ///
    /// Returns the number of entries removed.
    ///
    /// # Errors
    /// `ServiceError::MalformedRequest` for an empty or invalid part number.
    pub async fn invalidate(&self, raw_part_number: &str) -> Result<usize> {
        let part_number = PartNumber::parse(raw_part_number)?;

        let mut cache = self.cache.write().await;
        let removed = cache_keys_for(part_number.as_str())
            .iter()
            .filter(|key| cache.delete(key))
            .count();

        info!(part_number = %part_number, removed, "cache invalidated for part");
        Ok(removed)
    }

    /// Clears the entire cache, returning how many entries were dropped.
    pub async fn invalidate_all(&self) -> usize {
        let mut cache = self.cache.write().await;
        let removed = cache.len();
        cache.clear();

        info!(removed, "cache cleared");
        removed
    }

    // == Introspection ==
    pub async fn health(&self) -> HealthResponse {
        let cache = self.cache.read().await;
        let cache_health = CacheHealth {
            size: cache.len(),
            default_ttl_ms: cache.default_ttl().as_millis() as u64,
        };
        HealthResponse::ok(cache_health, &self.sources)
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    pub fn docs(&self) -> DocsResponse {
        DocsResponse::new(&self.sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SimulatedRemote;

    fn service() -> QueryService {
        QueryService::new(
            &Config::default(),
            Arc::new(SimulatedRemote::new().without_latency()),
        )
    }

    #[tokio::test]
    async fn test_query_rejects_blank_part_number() {
        let result = service().query_part("   ").await;
        assert!(matches!(result, Err(ServiceError::MalformedRequest(_))));
    }

    #[tokio::test]
    async fn test_query_trims_part_number() {
        let result = service().query_part(" NE555D ").await.unwrap();
        assert_eq!(result.part_number, "NE555D");
    }

    #[tokio::test]
    async fn test_invalidate_scope() {
        let service = service();
        service.query_part("NE555D").await.unwrap();
        service.query_part("LM317").await.unwrap();

        // 6 sources + alternatives + risk per part
        assert_eq!(service.cache().read().await.len(), 16);

        let removed = service.invalidate("NE555D").await.unwrap();
        assert_eq!(removed, 8);

        let mut cache = service.cache().write().await;
        assert!(!cache.has("LCSC:NE555D"));
        assert!(!cache.has("alt:NE555D"));
        assert!(!cache.has("risk:NE555D"));
        assert!(cache.has("LCSC:LM317"));
        assert!(cache.has("risk:LM317"));
        assert_eq!(cache.len(), 8);
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let service = service();
        service.query_part("LM7805").await.unwrap();

        assert_eq!(service.invalidate_all().await, 8);
        assert!(service.cache().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_health_reports_configuration() {
        let config = Config {
            default_ttl_ms: 5_000,
            sources: vec![SourceId::Mouser, SourceId::Arrow],
            ..Config::default()
        };
        let service = QueryService::new(
            &config,
            Arc::new(SimulatedRemote::new().without_latency()),
        );

        let health = service.health().await;

        assert_eq!(health.status, "ok");
        assert_eq!(health.cache.size, 0);
        assert_eq!(health.cache.default_ttl_ms, 5_000);
        assert_eq!(health.sources.count, 2);
    }
}
