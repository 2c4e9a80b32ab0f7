//! Error types for the summary cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Summary Error Enum ==
/// Unified error type for the summary cache and its HTTP surface.
///
/// The type is `Clone` so that every caller coalesced onto one in-flight
/// fetch observes the same failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// Paper identifier is empty or malformed
    #[error("Invalid paper id: {0}")]
    InvalidKey(String),

    /// The summarization service did not produce a summary
    #[error("Failed to generate summary: {0}")]
    GenerationFailed(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for SummaryError {
    fn into_response(self) -> Response {
        let status = match &self {
            SummaryError::InvalidKey(_) => StatusCode::BAD_REQUEST,
            SummaryError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
            SummaryError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the summary cache.
pub type Result<T> = std::result::Result<T, SummaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (SummaryError::InvalidKey("".into()), StatusCode::BAD_REQUEST),
            (
                SummaryError::GenerationFailed("timeout".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                SummaryError::InvalidRequest("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_generation_failed_message() {
        let err = SummaryError::GenerationFailed("upstream returned 500".into());
        assert_eq!(
            err.to_string(),
            "Failed to generate summary: upstream returned 500"
        );
    }
}
