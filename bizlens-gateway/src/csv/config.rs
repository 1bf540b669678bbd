//! Configuration types for the CSV-analysis backend.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default CSV backend base URL.
pub const CSV_API_BASE: &str = "http://localhost:8001";

/// Environment variable overriding the CSV backend base URL.
pub const CSV_URL_ENV: &str = "BIZLENS_CSV_URL";

/// Configuration for the CSV backend client.
///
/// # Example
///
/// ```rust
/// use bizlens_gateway::csv::CsvConfig;
///
/// let config = CsvConfig::new().with_base_url("http://csv.internal:8001");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Optional custom base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Optional per-request timeout. Expiry surfaces as a connectivity
    /// failure, like any other unreachable-backend condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl CsvConfig {
    /// Create a config with the default base URL and no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from the environment, falling back to the default
    /// base URL when `BIZLENS_CSV_URL` is unset or blank.
    pub fn from_env() -> Self {
        let base_url = std::env::var(CSV_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        Self { base_url, timeout: None }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
