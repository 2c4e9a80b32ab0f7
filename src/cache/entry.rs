//! Cache Entry Module
//!
//! Defines the structure for individual cached summaries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cached summary and its metadata.
///
/// Entries are never mutated in place. A refreshed summary for the same
/// paper is a new entry with a higher generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The generated summary text
    pub value: String,
    /// Insertion time
    pub created_at: Instant,
    /// Monotonic stamp identifying this exact entry
    pub generation: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `created_at`.
    pub fn new(value: String, created_at: Instant, generation: u64) -> Self {
        Self {
            value,
            created_at,
            generation,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl` at time `now`.
    ///
    /// Boundary condition: an entry is expired once its age is greater than
    /// or equal to the TTL.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn test_entry_creation() {
        let now = Instant::now();
        let entry = CacheEntry::new("summary".to_string(), now, 7);

        assert_eq!(entry.value, "summary");
        assert_eq!(entry.generation, 7);
        assert!(!entry.is_expired(TTL, now));
    }

    #[test]
    fn test_empty_value_is_a_valid_entry() {
        let now = Instant::now();
        let entry = CacheEntry::new(String::new(), now, 1);
        assert!(!entry.is_expired(TTL, now + Duration::from_secs(1)));
    }

    #[test]
    fn test_entry_expiration() {
        let now = Instant::now();
        let entry = CacheEntry::new("summary".to_string(), now, 1);

        assert!(!entry.is_expired(TTL, now + Duration::from_secs(59)));
        assert!(entry.is_expired(TTL, now + Duration::from_secs(61)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::new("summary".to_string(), now, 1);

        // Entry should be expired when its age equals the TTL
        assert!(entry.is_expired(TTL, now + TTL), "Entry should be expired at boundary");
    }

    #[test]
    fn test_clock_before_creation_is_not_expired() {
        let now = Instant::now();
        let entry = CacheEntry::new("summary".to_string(), now + Duration::from_secs(5), 1);
        assert!(!entry.is_expired(TTL, now));
    }
}
