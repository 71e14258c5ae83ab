//! Cache Statistics Module
//!
//! Counters behind `GET /stats`.

/// Read outcomes and expirations since the cache was created.
///
/// Counters survive [`TtlCache::clear`](super::TtlCache::clear); only the
/// entry count is reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Reads served from a live entry
    pub hits: u64,
    /// Reads that found nothing or an expired entry
    pub misses: u64,
    /// Entries dropped after their TTL, by a read or by the sweep
    pub expirations: u64,
    /// Entries currently stored, expired or not
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total reads observed.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of reads that were hits; 0.0 before the first read.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub(crate) fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_stats_have_no_hit_rate() {
        let stats = CacheStats::new();
        assert_eq!(stats.lookups(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_after_cold_then_warm_query() {
        let mut stats = CacheStats::new();
        // 8 lookups per part query: first cold, then warm
        (0..8).for_each(|_| stats.record_miss());
        (0..8).for_each(|_| stats.record_hit());

        assert_eq!(stats.lookups(), 16);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_expirations_accumulate_across_sweeps() {
        let mut stats = CacheStats::new();
        stats.record_expirations(1);
        stats.record_expirations(0);
        stats.record_expirations(6);
        assert_eq!(stats.expirations, 7);
    }
}
