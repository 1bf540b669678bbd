//! Configuration types for the market-research backend.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default research backend base URL.
pub const RESEARCH_API_BASE: &str = "http://localhost:8000";

/// Environment variable overriding the research backend base URL.
pub const RESEARCH_URL_ENV: &str = "BIZLENS_RESEARCH_URL";

/// Configuration for the research backend client.
///
/// # Example
///
/// ```rust
/// use bizlens_gateway::research::ResearchConfig;
/// use std::time::Duration;
///
/// let config = ResearchConfig::new()
///     .with_base_url("http://research.internal:8000")
///     .with_timeout(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// Optional custom base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Optional per-request timeout. Expiry surfaces as a connectivity
    /// failure, like any other unreachable-backend condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl ResearchConfig {
    /// Create a config with the default base URL and no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from the environment, falling back to the default
    /// base URL when `BIZLENS_RESEARCH_URL` is unset or blank.
    pub fn from_env() -> Self {
        let base_url = std::env::var(RESEARCH_URL_ENV).ok().filter(|v| !v.trim().is_empty());
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

/// Options for comprehensive research requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchOptions {
    /// Ask the backend to embed its raw scraped data in the response.
    pub include_raw_data: bool,
    /// Pass-through hint allowing the backend to serve cached results. The
    /// gateway itself never caches.
    pub use_cache: bool,
}

impl Default for ResearchOptions {
    fn default() -> Self {
        Self { include_raw_data: false, use_cache: true }
    }
}

/// Options for city-opportunity requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityOptions {
    /// Include a detailed analysis for each suggested business.
    pub include_analysis: bool,
    /// Maximum number of opportunities to return.
    pub max_opportunities: u32,
}

impl Default for OpportunityOptions {
    fn default() -> Self {
        Self { include_analysis: true, max_opportunities: 5 }
    }
}
