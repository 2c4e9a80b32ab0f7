//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, coalesced waits
//! and removals.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from a valid entry
    pub hits: u64,
    /// Lookups that started a summarization call
    pub misses: u64,
    /// Lookups that joined a summarization call already in flight
    pub coalesced: u64,
    /// Summarization calls that failed
    pub fetch_failures: u64,
    /// Entries removed to stay within capacity
    pub evictions: u64,
    /// Entries removed because their TTL elapsed
    pub expirations: u64,
    /// Explicit invalidations that removed an entry or pending fetch
    pub invalidations: u64,
    /// Current number of stored entries
    pub total_entries: usize,
    /// Summarization calls currently in flight
    pub in_flight: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    /// Coalesced waits are not counted on either side.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_coalesced(&mut self) {
        self.coalesced += 1;
    }

    pub fn record_fetch_failure(&mut self) {
        self.fetch_failures += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub fn record_invalidation(&mut self) {
        self.invalidations += 1;
    }

    // == Update Gauges ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }

    /// Updates the in-flight fetch count.
    pub fn set_in_flight(&mut self, count: usize) {
        self.in_flight = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_hit_rate_ignores_coalesced() {
        let mut stats = CacheStats::new();
        stats.record_miss();
        stats.record_coalesced();
        stats.record_coalesced();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.coalesced, 2);
    }

    #[test]
    fn test_record_removals() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_expirations(3);
        stats.record_invalidation();
        stats.record_fetch_failure();
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.expirations, 3);
        assert_eq!(stats.invalidations, 1);
        assert_eq!(stats.fetch_failures, 1);
    }

    #[test]
    fn test_set_gauges() {
        let mut stats = CacheStats::new();
        stats.set_total_entries(42);
        stats.set_in_flight(2);
        assert_eq!(stats.total_entries, 42);
        assert_eq!(stats.in_flight, 2);
    }
}
