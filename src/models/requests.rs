//! Request DTOs for the summary cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum accepted paper content size in bytes
pub const MAX_CONTENT_SIZE: usize = 2 * 1024 * 1024; // 2 MB

/// Request body for POST /api/papers/:paper_id/summary
///
/// # Fields
/// - `content`: Paper text forwarded to the summarizer on a cache miss
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRequest {
    /// The paper content
    #[serde(default)]
    pub content: String,
}

impl SummaryRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.content.len() > MAX_CONTENT_SIZE {
            return Some(format!(
                "Content exceeds maximum size of {} bytes",
                MAX_CONTENT_SIZE
            ));
        }
        None
    }
}
