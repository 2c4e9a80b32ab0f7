//! Summary Store Module
//!
//! Synchronous storage combining a HashMap of summaries with insertion-order
//! capacity eviction and TTL expiration. All time-dependent methods take the
//! current instant explicitly.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder};

/// Stale slots tolerated in the insertion order before it is compacted.
const ORDER_SLACK: usize = 64;

// == Summary Store ==
/// Storage for generated summaries keyed by paper id.
#[derive(Debug)]
pub struct SummaryStore {
    /// Paper id to summary storage
    entries: HashMap<String, CacheEntry>,
    /// Insertion order for oldest-first eviction
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Lifetime of every entry
    ttl: Duration,
}

impl SummaryStore {
    // == Constructor ==
    /// Creates a new store with the given capacity and TTL.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl,
        }
    }

    // == Get ==
    /// Returns the summary for `key` if a valid entry exists at `now`.
    ///
    /// An expired entry is removed on the spot and reported as absent.
    pub fn get(&mut self, key: &str, now: Instant) -> Option<String> {
        let entry = self.entries.get(key)?;

        if entry.is_expired(self.ttl, now) {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            self.after_removal();
            return None;
        }

        let value = entry.value.clone();
        self.stats.record_hit();
        Some(value)
    }

    // == Insert ==
    /// Stores `value` for `key`, replacing any previous entry.
    ///
    /// When a new key would exceed capacity, the oldest entries are evicted
    /// first. `generation` must be unique to this insertion.
    pub fn insert(&mut self, key: String, value: String, generation: u64, now: Instant) {
        if !self.entries.contains_key(&key) {
            while self.entries.len() >= self.max_entries {
                if !self.evict_oldest() {
                    break;
                }
            }
        }

        self.order.push(&key, generation);
        self.entries
            .insert(key, CacheEntry::new(value, now, generation));
        self.after_removal();
    }

    // == Remove ==
    /// Removes the entry for `key`. Returns whether one was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.after_removal();
        }
        removed
    }

    // == Peek ==
    /// Returns the stored entry without checking expiry or touching stats.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Cleanup Expired ==
    /// Removes all entries expired at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl, now));

        let count = before - self.entries.len();
        if count > 0 {
            self.stats.record_expirations(count);
            self.after_removal();
        }
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Mutable access for counters recorded outside the store.
    pub fn stats_mut(&mut self) -> &mut CacheStats {
        &mut self.stats
    }

    // == Length ==
    /// Returns the number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Eviction ==
    /// Evicts the oldest live entry. Returns false when nothing is left.
    fn evict_oldest(&mut self) -> bool {
        while let Some((key, generation)) = self.order.pop_oldest() {
            // Only the exact entry the slot was recorded for may be evicted
            let live = self
                .entries
                .get(&key)
                .is_some_and(|entry| entry.generation == generation);
            if live {
                self.entries.remove(&key);
                self.stats.record_eviction();
                return true;
            }
        }
        false
    }

    fn after_removal(&mut self) {
        self.stats.set_total_entries(self.entries.len());
        if self.order.len() > self.entries.len() * 2 + ORDER_SLACK {
            let entries = &self.entries;
            self.order.compact(|key, generation| {
                entries
                    .get(key)
                    .is_some_and(|entry| entry.generation == generation)
            });
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    fn store(max_entries: usize) -> SummaryStore {
        SummaryStore::new(max_entries, TTL)
    }

    #[test]
    fn test_store_new() {
        let store = store(100);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl, TTL);
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let mut store = store(0);
        let now = Instant::now();
        store.insert("p1".into(), "s1".into(), 1, now);
        assert_eq!(store.max_entries, 1);
        assert_eq!(store.get("p1", now).as_deref(), Some("s1"));
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = store(100);
        let now = Instant::now();

        store.insert("p1".into(), "summary one".into(), 1, now);

        assert_eq!(store.get("p1", now).as_deref(), Some("summary one"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().hits, 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = store(100);
        assert!(store.get("missing", Instant::now()).is_none());
        assert_eq!(store.stats().hits, 0);
    }

    #[test]
    fn test_store_empty_summary_is_present() {
        let mut store = store(100);
        let now = Instant::now();
        store.insert("p1".into(), String::new(), 1, now);
        assert_eq!(store.get("p1", now), Some(String::new()));
    }

    #[test]
    fn test_store_remove() {
        let mut store = store(100);
        let now = Instant::now();
        store.insert("p1".into(), "s1".into(), 1, now);

        assert!(store.remove("p1"));
        assert!(!store.remove("p1"));
        assert!(store.is_empty());
        assert!(store.get("p1", now).is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = store(100);
        let now = Instant::now();

        store.insert("p1".into(), "old".into(), 1, now);
        store.insert("p1".into(), "new".into(), 2, now);

        assert_eq!(store.get("p1", now).as_deref(), Some("new"));
        assert_eq!(store.peek("p1").map(|e| e.generation), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lazy_expiration() {
        let mut store = store(100);
        let now = Instant::now();
        store.insert("p1".into(), "s1".into(), 1, now);

        assert!(store.get("p1", now + TTL - Duration::from_secs(1)).is_some());
        assert!(store.get("p1", now + TTL).is_none());

        // Expired entry is removed from storage, not just hidden
        assert!(store.peek("p1").is_none());
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_store_oldest_first_eviction() {
        let mut store = store(3);
        let now = Instant::now();

        store.insert("p1".into(), "s1".into(), 1, now);
        store.insert("p2".into(), "s2".into(), 2, now);
        store.insert("p3".into(), "s3".into(), 3, now);
        store.insert("p4".into(), "s4".into(), 4, now);

        assert_eq!(store.len(), 3);
        assert!(store.get("p1", now).is_none());
        assert!(store.get("p2", now).is_some());
        assert!(store.get("p4", now).is_some());
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_store_eviction_skips_overwritten_slot() {
        let mut store = store(2);
        let now = Instant::now();

        store.insert("p1".into(), "s1".into(), 1, now);
        store.insert("p2".into(), "s2".into(), 2, now);
        // p1 is refreshed, so p2 is now the oldest live entry
        store.insert("p1".into(), "s1b".into(), 3, now);
        store.insert("p3".into(), "s3".into(), 4, now);

        assert_eq!(store.get("p1", now).as_deref(), Some("s1b"));
        assert!(store.get("p2", now).is_none());
        assert!(store.get("p3", now).is_some());
    }

    #[test]
    fn test_store_overwrite_at_capacity_does_not_evict() {
        let mut store = store(2);
        let now = Instant::now();

        store.insert("p1".into(), "s1".into(), 1, now);
        store.insert("p2".into(), "s2".into(), 2, now);
        store.insert("p2".into(), "s2b".into(), 3, now);

        assert_eq!(store.len(), 2);
        assert_eq!(store.stats().evictions, 0);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = store(100);
        let start = Instant::now();

        store.insert("p1".into(), "s1".into(), 1, start);
        store.insert("p2".into(), "s2".into(), 2, start + Duration::from_secs(200));

        let removed = store.cleanup_expired(start + TTL);
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.peek("p2").is_some());
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_store_order_compacts_after_churn() {
        let mut store = store(10);
        let now = Instant::now();

        for generation in 0..500 {
            store.insert("hot".into(), format!("s{generation}"), generation, now);
        }

        assert_eq!(store.len(), 1);
        assert!(store.order.len() <= 2 + ORDER_SLACK + 1);
    }
}
