//! Summarizer Module
//!
//! The upstream capability the cache sits in front of. The cache only needs
//! `summarize(paper_id, content)`; how the summary is produced is opaque.

mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpSummarizer;

// == Summarizer Error ==
/// Ways a summarization call can fail.
#[derive(Error, Debug)]
pub enum SummarizerError {
    /// Connection, timeout or other transport failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("service returned status {0}")]
    Status(u16),

    /// The response body was not a valid summary payload
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The summarizer panicked while producing a summary
    #[error("summarizer panicked")]
    Panicked,
}

// == Summarizer Trait ==
/// Produces a summary for a paper.
///
/// Implementations may be slow and may fail. They are expected to be
/// idempotent: the same input yields the same or an equivalent summary.
#[async_trait]
pub trait Summarizer: Send + Sync + 'static {
    async fn summarize(&self, paper_id: &str, content: &str) -> Result<String, SummarizerError>;
}
