//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the summarization service
    pub ml_service_url: String,
    /// Timeout in seconds for a single summarization request
    pub ml_request_timeout: u64,
    /// Optional summarization method forwarded to the service
    pub summary_method: Option<String>,
    /// Time-to-live in seconds for cached summaries
    pub summary_ttl: u64,
    /// Maximum number of summaries the cache can hold
    pub max_entries: usize,
    /// Background expiry sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `ML_SERVICE_URL` - Summarization service URL (default: http://localhost:5000)
    /// - `ML_REQUEST_TIMEOUT` - Summarization timeout in seconds (default: 30)
    /// - `SUMMARY_METHOD` - `extractive` or `abstractive` (default: unset)
    /// - `SUMMARY_TTL` - Summary TTL in seconds (default: 86400)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 10000)
    /// - `SWEEP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            ml_service_url: env::var("ML_SERVICE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.ml_service_url),
            ml_request_timeout: parse_var("ML_REQUEST_TIMEOUT")
                .unwrap_or(defaults.ml_request_timeout),
            summary_method: env::var("SUMMARY_METHOD").ok().filter(|v| !v.is_empty()),
            summary_ttl: parse_var("SUMMARY_TTL").unwrap_or(defaults.summary_ttl),
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            sweep_interval: parse_var("SWEEP_INTERVAL").unwrap_or(defaults.sweep_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            ml_service_url: "http://localhost:5000".to_string(),
            ml_request_timeout: 30,
            summary_method: None,
            summary_ttl: crate::cache::DEFAULT_TTL_SECS,
            max_entries: 10_000,
            sweep_interval: 60,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
