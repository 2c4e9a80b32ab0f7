//! API Routes
//!
//! Configures the Axum router with all summary cache endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, invalidate_handler, stats_handler, summary_handler, AppState,
};
use crate::models::MAX_CONTENT_SIZE;

/// Room for the JSON envelope around the largest accepted content.
const BODY_LIMIT: usize = MAX_CONTENT_SIZE + 64 * 1024;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/papers/:paper_id/summary` - Get or generate a paper summary
/// - `DELETE /api/papers/:paper_id/summary` - Invalidate a cached summary
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/api/papers/:paper_id/summary",
            post(summary_handler).delete(invalidate_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
