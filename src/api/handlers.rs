//! API Handlers
//!
//! HTTP request handlers for each summary cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::SummaryCache;
use crate::config::Config;
use crate::error::{Result, SummaryError};
use crate::models::{
    HealthResponse, InvalidateResponse, StatsResponse, SummaryRequest, SummaryResponse,
};
use crate::summarizer::{HttpSummarizer, SummarizerError};

/// Application state shared across all handlers.
///
/// Holds the one summary cache owned by the server.
#[derive(Clone)]
pub struct AppState {
    /// Shared summary cache
    pub cache: SummaryCache,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: SummaryCache) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds an HTTP summarizer for the configured ML service and a cache
    /// sized from the Config.
    pub fn from_config(config: &Config) -> std::result::Result<Self, SummarizerError> {
        let summarizer = Arc::new(HttpSummarizer::from_config(config)?);
        Ok(Self::new(SummaryCache::from_config(config, summarizer)))
    }
}

/// Handler for POST /api/papers/:paper_id/summary
///
/// Returns the cached summary for the paper, generating it on a miss.
pub async fn summary_handler(
    State(state): State<AppState>,
    Path(paper_id): Path<String>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(SummaryError::InvalidRequest(error_msg));
    }

    let summary = state.cache.get_summary(&paper_id, &req.content).await?;

    Ok(Json(SummaryResponse::new(paper_id, summary)))
}

/// Handler for DELETE /api/papers/:paper_id/summary
///
/// Invalidates the cached summary. Succeeds whether or not one was cached.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(paper_id): Path<String>,
) -> Json<InvalidateResponse> {
    state.cache.invalidate(&paper_id).await;

    Json(InvalidateResponse::new(paper_id))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
