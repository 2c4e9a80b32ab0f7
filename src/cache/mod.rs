//! Cache Module
//!
//! Provides the in-memory summary cache with single-flight fetches, TTL
//! expiration and oldest-first capacity eviction.

mod entry;
mod order;
mod stats;
mod store;
mod summary;


// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::SummaryStore;
pub use summary::{validate_paper_id, SummaryCache};

// == Public Constants ==
/// Maximum allowed paper id length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Default lifetime of a cached summary
pub const DEFAULT_TTL_SECS: u64 = 24 * 60 * 60;
