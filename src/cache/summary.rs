//! Summary Cache Module
//!
//! Cache-aside lookup in front of a [`Summarizer`], with single-flight
//! coalescing of concurrent misses and TTL expiry.
//!
//! Per paper id the cache moves through `Absent -> Pending -> Present ->
//! Absent`. `Pending` is an entry in the in-flight map holding a shared
//! future for the running summarization. The fetch itself runs on its own
//! task, so callers that give up waiting never cancel it.

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, SummaryStore, MAX_KEY_LENGTH};
use crate::config::Config;
use crate::error::{Result, SummaryError};
use crate::summarizer::{Summarizer, SummarizerError};

type SharedFetch = Shared<BoxFuture<'static, Result<String>>>;

/// A summarization call that has started but not completed.
struct InFlight {
    generation: u64,
    fetch: SharedFetch,
}

/// Everything guarded by the cache lock.
struct CacheState {
    store: SummaryStore,
    in_flight: HashMap<String, InFlight>,
    next_generation: u64,
}

impl CacheState {
    fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    /// Whether `generation` is still the registered fetch for `key`.
    fn is_current(&self, key: &str, generation: u64) -> bool {
        self.in_flight
            .get(key)
            .is_some_and(|pending| pending.generation == generation)
    }

    /// Settles a finished fetch. Only the fetch still registered for `key`
    /// may populate the store.
    fn complete(
        &mut self,
        key: &str,
        generation: u64,
        outcome: std::result::Result<String, SummarizerError>,
        elapsed: Duration,
    ) -> Result<String> {
        let current = self.is_current(key, generation);
        if current {
            self.in_flight.remove(key);
        }

        match outcome {
            Ok(summary) => {
                if current {
                    self.store
                        .insert(key.to_string(), summary.clone(), generation, Instant::now());
                    info!(
                        paper_id = %key,
                        elapsed_ms = elapsed_ms(elapsed),
                        "Summary generated and cached"
                    );
                } else {
                    info!(
                        paper_id = %key,
                        "Summary generated for an invalidated request; not cached"
                    );
                }
                Ok(summary)
            }
            Err(err) => {
                self.store.stats_mut().record_fetch_failure();
                warn!(
                    paper_id = %key,
                    error = %err,
                    elapsed_ms = elapsed_ms(elapsed),
                    "Summary generation error"
                );
                Err(SummaryError::GenerationFailed(err.to_string()))
            }
        }
    }
}

// == Summary Cache ==
/// Shared handle to the summary cache.
///
/// Cloning is cheap and every clone refers to the same store. Construct one
/// per server (or per test) and hand clones to whoever needs it.
#[derive(Clone)]
pub struct SummaryCache {
    state: Arc<Mutex<CacheState>>,
    summarizer: Arc<dyn Summarizer>,
}

impl SummaryCache {
    // == Constructor ==
    /// Creates an empty cache in front of `summarizer`.
    ///
    /// # Arguments
    /// * `summarizer` - Upstream summary producer
    /// * `max_entries` - Capacity, oldest entries are evicted first
    /// * `ttl` - Lifetime of every cached summary
    pub fn new(summarizer: Arc<dyn Summarizer>, max_entries: usize, ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(CacheState {
                store: SummaryStore::new(max_entries, ttl),
                in_flight: HashMap::new(),
                next_generation: 0,
            })),
            summarizer,
        }
    }

    /// Creates a cache sized and timed from the server configuration.
    pub fn from_config(config: &Config, summarizer: Arc<dyn Summarizer>) -> Self {
        Self::new(
            summarizer,
            config.max_entries,
            Duration::from_secs(config.summary_ttl),
        )
    }

    // == Get Summary ==
    /// Returns the summary for `paper_id`, generating it on a miss.
    ///
    /// A valid cached summary is returned without looking at `content`. If
    /// a summarization for `paper_id` is already running, this call waits
    /// for that result instead of starting another. Failures are returned
    /// as [`SummaryError::GenerationFailed`] and are never cached.
    pub async fn get_summary(&self, paper_id: &str, content: &str) -> Result<String> {
        validate_paper_id(paper_id)?;

        let fetch = {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;

            if let Some(summary) = state.store.get(paper_id, Instant::now()) {
                debug!(paper_id = %paper_id, "Cache hit");
                return Ok(summary);
            }

            match state.in_flight.get(paper_id).map(|p| p.fetch.clone()) {
                Some(fetch) => {
                    state.store.stats_mut().record_coalesced();
                    debug!(paper_id = %paper_id, "Joining in-flight summary request");
                    fetch
                }
                None => {
                    state.store.stats_mut().record_miss();
                    info!(paper_id = %paper_id, "Cache miss, requesting summary");
                    self.start_fetch(state, paper_id, content)
                }
            }
        };

        fetch.await
    }

    // == Invalidate ==
    /// Forgets any summary for `paper_id`. No-op when nothing is cached.
    ///
    /// A summarization still running for `paper_id` is detached: its current
    /// waiters still receive the result, but it will not be stored.
    pub async fn invalidate(&self, paper_id: &str) {
        if validate_paper_id(paper_id).is_err() {
            debug!(paper_id = %paper_id, "Ignoring invalidation for invalid paper id");
            return;
        }

        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        let removed = state.store.remove(paper_id);
        let detached = state.in_flight.remove(paper_id).is_some();
        if removed || detached {
            state.store.stats_mut().record_invalidation();
        }

        info!(
            paper_id = %paper_id,
            removed,
            detached_pending = detached,
            "Cache invalidated"
        );
    }

    // == Sweep ==
    /// Removes all expired summaries. Returns how many were removed.
    pub async fn sweep_expired(&self) -> usize {
        self.state.lock().await.store.cleanup_expired(Instant::now())
    }

    // == Introspection ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        let mut stats = state.store.stats();
        stats.set_in_flight(state.in_flight.len());
        stats
    }

    /// Number of stored summaries, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.state.lock().await.store.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // == Fetch ==
    /// Registers a pending fetch for `paper_id` and spawns the summarizer
    /// call. Must be called with the cache lock held.
    fn start_fetch(&self, state: &mut CacheState, paper_id: &str, content: &str) -> SharedFetch {
        let generation = state.next_generation();
        let summarizer = Arc::clone(&self.summarizer);
        let shared_state = Arc::clone(&self.state);
        let key = paper_id.to_string();
        let content = content.to_string();

        // The task needs the lock to settle, so it cannot finish before the
        // in-flight marker below is registered.
        let task = tokio::spawn(async move {
            let started = Instant::now();
            let outcome = AssertUnwindSafe(summarizer.summarize(&key, &content))
                .catch_unwind()
                .await
                .unwrap_or(Err(SummarizerError::Panicked));

            let mut state = shared_state.lock().await;
            state.complete(&key, generation, outcome, started.elapsed())
        });

        let cleanup_state = Arc::clone(&self.state);
        let cleanup_key = paper_id.to_string();
        let fetch = async move {
            match task.await {
                Ok(outcome) => outcome,
                Err(join_err) => {
                    let mut state = cleanup_state.lock().await;
                    if state.is_current(&cleanup_key, generation) {
                        state.in_flight.remove(&cleanup_key);
                    }
                    Err(SummaryError::GenerationFailed(format!(
                        "summary task did not complete: {join_err}"
                    )))
                }
            }
        }
        .boxed()
        .shared();

        state.in_flight.insert(
            paper_id.to_string(),
            InFlight {
                generation,
                fetch: fetch.clone(),
            },
        );
        fetch
    }
}

/// Milliseconds for log fields, saturating at `u64::MAX`.
fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

// == Validation ==
/// Checks that `paper_id` is usable as a cache key.
pub fn validate_paper_id(paper_id: &str) -> Result<()> {
    if paper_id.is_empty() {
        return Err(SummaryError::InvalidKey(
            "paper id cannot be empty".to_string(),
        ));
    }
    if paper_id.len() > MAX_KEY_LENGTH {
        return Err(SummaryError::InvalidKey(format!(
            "paper id exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    if paper_id.chars().any(char::is_control) {
        return Err(SummaryError::InvalidKey(
            "paper id contains control characters".to_string(),
        ));
    }
    Ok(())
}
