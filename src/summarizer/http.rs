//! HTTP Summarizer
//!
//! Calls the ML service's `POST /api/summarize` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Summarizer, SummarizerError};
use crate::config::Config;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummarizeRequest<'a> {
    paper_id: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

// == HTTP Summarizer ==
/// Summarizer backed by the remote ML service.
#[derive(Debug, Clone)]
pub struct HttpSummarizer {
    client: reqwest::Client,
    endpoint: String,
    method: Option<String>,
}

impl HttpSummarizer {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - Service root, e.g. `http://localhost:5000`
    /// * `timeout` - Per-request timeout
    /// * `method` - Optional summarization method forwarded with every request
    pub fn new(
        base_url: &str,
        timeout: Duration,
        method: Option<String>,
    ) -> Result<Self, SummarizerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SummarizerError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/summarize", base_url.trim_end_matches('/')),
            method,
        })
    }

    /// Creates a client from the server configuration.
    pub fn from_config(config: &Config) -> Result<Self, SummarizerError> {
        Self::new(
            &config.ml_service_url,
            Duration::from_secs(config.ml_request_timeout),
            config.summary_method.clone(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, paper_id: &str, content: &str) -> Result<String, SummarizerError> {
        let body = SummarizeRequest {
            paper_id,
            content,
            method: self.method.as_deref(),
        };

        debug!(paper_id = %paper_id, endpoint = %self.endpoint, "Requesting summary");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummarizerError::Status(status.as_u16()));
        }

        let payload: SummarizeResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::Malformed(e.to_string()))?;

        Ok(payload.summary)
    }
}
