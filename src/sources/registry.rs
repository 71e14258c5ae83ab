//! Source Registry
//!
//! The configured vendors, in configured order.

use std::sync::Arc;

use crate::cache::ReadThrough;
use crate::sources::{RemoteLookup, SourceAdapter, SourceId};

/// Ordered set of source adapters. The order is the order quotes appear in
/// every aggregated result.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    adapters: Vec<SourceAdapter>,
}

impl SourceRegistry {
    /// Builds one adapter per id, skipping repeated ids.
    pub fn new(
        sources: &[SourceId],
        remote: Arc<dyn RemoteLookup>,
        read_through: ReadThrough,
    ) -> Self {
        let mut adapters: Vec<SourceAdapter> = Vec::with_capacity(sources.len());
        for &source in sources {
            if adapters.iter().all(|adapter| adapter.source() != source) {
                adapters.push(SourceAdapter::new(
                    source,
                    remote.clone(),
                    read_through.clone(),
                ));
            }
        }
        Self { adapters }
    }

    pub fn adapters(&self) -> &[SourceAdapter] {
        &self.adapters
    }

    pub fn get(&self, source: SourceId) -> Option<&SourceAdapter> {
        self.adapters.iter().find(|adapter| adapter.source() == source)
    }

    pub fn ids(&self) -> Vec<SourceId> {
        self.adapters.iter().map(SourceAdapter::source).collect()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
