//! # Aggregator
//!
//! Fans a part number out to every configured price source plus the
//! alternatives and risk adapters, then merges the answers.
//!
//! Every lookup for one aggregation runs concurrently inside the calling
//! task and the aggregator waits for all of them. A failing source never
//! fails the aggregation: its quote is synthesized by the
//! [`FallbackQuoter`], failed or empty alternatives come from the
//! [`PartCatalog`], and the risk adapter always produces a record.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info};

use crate::insights::{AlternativesAdapter, PartCatalog, RiskAdapter};
use crate::models::{AggregatedResult, AlternativeRecord, PartNumber, PriceQuote};
use crate::sources::{FallbackQuoter, SourceRegistry};

/// Multi-source aggregation engine.
#[derive(Debug)]
pub struct Aggregator {
    sources: SourceRegistry,
    alternatives: AlternativesAdapter,
    risk: RiskAdapter,
    catalog: Arc<dyn PartCatalog>,
    fallback: FallbackQuoter,
}

impl Aggregator {
    pub fn new(
        sources: SourceRegistry,
        alternatives: AlternativesAdapter,
        risk: RiskAdapter,
        catalog: Arc<dyn PartCatalog>,
        fallback: FallbackQuoter,
    ) -> Self {
        Self {
            sources,
            alternatives,
            risk,
            catalog,
            fallback,
        }
    }

    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }

    // == Aggregate ==
    /// Builds the full result for `part_number`.
    ///
    /// `prices` holds exactly one quote per configured source, in registry
    /// order, whatever the individual sources did.
    pub async fn aggregate(&self, part_number: &PartNumber) -> AggregatedResult {
        let part = part_number.as_str();
        debug!(part_number = part, sources = self.sources.len(), "aggregating");

        let prices = join_all(
            self.sources
                .adapters()
                .iter()
                .map(|adapter| async move { (adapter.source(), adapter.fetch_price(part).await) }),
        );

        let (prices, alternatives, risk) = tokio::join!(
            prices,
            self.alternatives.fetch_alternatives(part),
            self.risk.fetch_risk(part),
        );

        let prices: Vec<PriceQuote> = prices
            .into_iter()
            .map(|(source, quote)| {
                quote.unwrap_or_else(|| {
                    info!(source = %source, part_number = part, "using fallback quote");
                    self.fallback.quote(source)
                })
            })
            .collect();

        AggregatedResult {
            part_number: part.to_string(),
            prices,
            alternatives: self.alternatives_or_catalog(part, alternatives),
            risk,
        }
    }

    fn alternatives_or_catalog(
        &self,
        part: &str,
        fetched: Option<Vec<AlternativeRecord>>,
    ) -> Vec<AlternativeRecord> {
        match fetched {
            Some(alternatives) if !alternatives.is_empty() => alternatives,
            _ => {
                debug!(part_number = part, "no alternatives fetched, using catalog");
                self.catalog.alternatives(part)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{new_shared_cache, ReadThrough};
    use crate::insights::SeedCatalog;
    use crate::models::QuoteOrigin;
    use crate::sources::{RemoteLookup, SimulatedRemote, SourceId};
    use std::time::Duration;

    fn aggregator(remote: SimulatedRemote, sources: &[SourceId], fallback: bool) -> Aggregator {
        let remote: Arc<dyn RemoteLookup> = Arc::new(remote);
        let read_through = ReadThrough::new(
            new_shared_cache(Duration::from_secs(60)),
            Duration::from_secs(1),
        );
        let catalog: Arc<dyn PartCatalog> = Arc::new(SeedCatalog);

        Aggregator::new(
            SourceRegistry::new(sources, remote.clone(), read_through.clone()),
            AlternativesAdapter::new(remote.clone(), read_through.clone()),
            RiskAdapter::new(remote, read_through, catalog.clone()),
            catalog,
            FallbackQuoter::new(fallback),
        )
    }

    fn part(raw: &str) -> PartNumber {
        PartNumber::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_known_part() {
        let aggregator = aggregator(
            SimulatedRemote::new().without_latency(),
            &SourceId::ALL,
            true,
        );

        let result = aggregator.aggregate(&part("NE555D")).await;

        assert_eq!(result.part_number, "NE555D");
        assert_eq!(result.prices.len(), SourceId::ALL.len());
        assert!(result.prices.iter().all(|q| q.origin == QuoteOrigin::Live));
        assert!(result.alternatives.iter().any(|a| a.model == "LM555"));
        assert_eq!(result.risk.lifecycle_status, "in production");
    }

    #[tokio::test]
    async fn test_prices_follow_configured_order() {
        let order = [SourceId::Arrow, SourceId::Lcsc, SourceId::Mouser];
        let aggregator = aggregator(SimulatedRemote::new().without_latency(), &order, true);

        let result = aggregator.aggregate(&part("LM317")).await;

        let names: Vec<&str> = result.prices.iter().map(|q| q.source_name.as_str()).collect();
        assert_eq!(names, vec!["Arrow", "LCSC", "Mouser"]);
    }

    #[tokio::test]
    async fn test_all_sources_failing_still_yields_every_source() {
        let aggregator = aggregator(
            SimulatedRemote::new()
                .without_latency()
                .with_failure_rate(1.0),
            &SourceId::ALL,
            true,
        );

        let result = aggregator.aggregate(&part("NE555D")).await;

        assert_eq!(result.prices.len(), SourceId::ALL.len());
        assert!(result.prices.iter().all(|q| q.origin == QuoteOrigin::Fallback));
        // Catalog fills in for the failed remotes
        assert!(result.alternatives.iter().any(|a| a.model == "LM555"));
        assert_eq!(result.risk.lifecycle_status, "in production");
    }

    #[tokio::test]
    async fn test_disabled_fallback_keeps_placeholders() {
        let aggregator = aggregator(
            SimulatedRemote::new()
                .without_latency()
                .with_failure_rate(1.0),
            &SourceId::ALL,
            false,
        );

        let result = aggregator.aggregate(&part("NE555D")).await;

        assert_eq!(result.prices.len(), SourceId::ALL.len());
        assert!(result
            .prices
            .iter()
            .all(|q| q.origin == QuoteOrigin::Unavailable));
    }

    #[tokio::test]
    async fn test_unknown_part() {
        let aggregator = aggregator(
            SimulatedRemote::new().without_latency(),
            &SourceId::ALL,
            true,
        );

        let result = aggregator.aggregate(&part("UNKNOWN-XYZ-1")).await;

        assert_eq!(result.prices.len(), SourceId::ALL.len());
        assert!(result.alternatives.is_empty());
        assert!(result.risk.is_unknown());
    }
}
