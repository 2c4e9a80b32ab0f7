//! Response DTOs for the summary cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for POST /api/papers/:paper_id/summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    /// The requested paper
    pub paper_id: String,
    /// The generated or cached summary
    pub summary: String,
}

impl SummaryResponse {
    /// Creates a new SummaryResponse
    pub fn new(paper_id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            paper_id: paper_id.into(),
            summary: summary.into(),
        }
    }
}

/// Response body for DELETE /api/papers/:paper_id/summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidateResponse {
    /// Success message
    pub message: String,
    /// The paper whose summary was invalidated
    pub paper_id: String,
}

impl InvalidateResponse {
    /// Creates a new InvalidateResponse
    pub fn new(paper_id: impl Into<String>) -> Self {
        let paper_id = paper_id.into();
        Self {
            message: format!("Summary cache invalidated for paper '{}'", paper_id),
            paper_id,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Cache counters and gauges
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            stats,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_response_serialize() {
        let resp = SummaryResponse::new("p1", "Summary A");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, json!({"paperId": "p1", "summary": "Summary A"}));
    }

    #[test]
    fn test_invalidate_response_serialize() {
        let resp = InvalidateResponse::new("p1");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["paperId"], "p1");
        assert!(json["message"].as_str().unwrap().contains("invalidated"));
    }

    #[test]
    fn test_stats_response_flattens_counters() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.set_in_flight(1);

        let json = serde_json::to_value(StatsResponse::from(stats)).unwrap();
        assert_eq!(json["hits"], 4);
        assert_eq!(json["misses"], 1);
        assert_eq!(json["in_flight"], 1);
        assert!((json["hit_rate"].as_f64().unwrap() - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::from(CacheStats::new());
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"], "Something went wrong");
    }
}
