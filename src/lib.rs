//! Summary Cache - A single-flight summary cache server
//!
//! Fronts a slow remote paper summarization service with an in-memory cache
//! that coalesces concurrent misses and expires summaries after a TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod summarizer;
pub mod tasks;

pub use api::AppState;
pub use cache::SummaryCache;
pub use config::Config;
pub use error::SummaryError;
pub use summarizer::{HttpSummarizer, Summarizer, SummarizerError};
pub use tasks::spawn_sweep_task;
