//! API Module
//!
//! HTTP handlers and routing for the summary cache REST API.
//!
//! # Endpoints
//! - `POST /api/papers/:paper_id/summary` - Get or generate a paper summary
//! - `DELETE /api/papers/:paper_id/summary` - Invalidate a cached summary
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
