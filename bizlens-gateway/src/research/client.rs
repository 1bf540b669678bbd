//! Market-research backend client.

use super::config::{OpportunityOptions, RESEARCH_API_BASE, ResearchConfig, ResearchOptions};
use crate::http::{connectivity_error, read_json};
use bizlens_core::{BizlensError, Result};
use reqwest::Client;
use serde_json::Value;

const BACKEND: &str = "research";

/// Client for the market-research agent backend.
///
/// Stateless: every call is one independent request/response exchange. The
/// gateway performs no retries and no caching; returned JSON is handed back
/// exactly as the backend produced it.
///
/// # Example
///
/// ```rust,ignore
/// use bizlens_gateway::research::{ResearchClient, ResearchConfig, ResearchOptions};
///
/// let client = ResearchClient::new(ResearchConfig::from_env())?;
/// let report = client
///     .comprehensive_research("pharmacy", "Pune", &ResearchOptions::default())
///     .await?;
/// ```
pub struct ResearchClient {
    client: Client,
    base_url: String,
}

impl ResearchClient {
    /// Create a new research client.
    pub fn new(config: ResearchConfig) -> Result<Self> {
        let ResearchConfig { base_url, timeout } = config;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BizlensError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url: base_url.unwrap_or_else(|| RESEARCH_API_BASE.to_string()) })
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Full business and market analysis for a (business type, location)
    /// pair: `GET /api/comprehensive-research`.
    pub async fn comprehensive_research(
        &self,
        business_type: &str,
        location: &str,
        options: &ResearchOptions,
    ) -> Result<Value> {
        tracing::debug!(business_type, location, "requesting comprehensive research");

        let response = self
            .client
            .get(self.api_url("/api/comprehensive-research"))
            .query(&[("business_type", business_type), ("location", location)])
            .query(&[
                ("include_raw_data", options.include_raw_data),
                ("use_cache", options.use_cache),
            ])
            .send()
            .await
            .map_err(|e| connectivity_error(BACKEND, &self.base_url, &e))?;

        read_json(BACKEND, response).await
    }

    /// Ranked business opportunities for a city: `GET /api/city-opportunities`.
    pub async fn city_opportunities(
        &self,
        city: &str,
        options: &OpportunityOptions,
    ) -> Result<Value> {
        tracing::debug!(city, "requesting city opportunities");

        let response = self
            .client
            .get(self.api_url("/api/city-opportunities"))
            .query(&[("city", city)])
            .query(&[("include_analysis", options.include_analysis)])
            .query(&[("max_opportunities", options.max_opportunities)])
            .send()
            .await
            .map_err(|e| connectivity_error(BACKEND, &self.base_url, &e))?;

        read_json(BACKEND, response).await
    }

    /// Raw scraped market data, unprocessed: `GET /api/raw-scraped-data`.
    pub async fn raw_scraped_data(&self, business_type: &str, location: &str) -> Result<Value> {
        tracing::debug!(business_type, location, "requesting raw scraped data");

        let response = self
            .client
            .get(self.api_url("/api/raw-scraped-data"))
            .query(&[("business_type", business_type), ("location", location)])
            .send()
            .await
            .map_err(|e| connectivity_error(BACKEND, &self.base_url, &e))?;

        read_json(BACKEND, response).await
    }

    /// Liveness probe: `GET /health`.
    pub async fn health(&self) -> Result<Value> {
        let response = self
            .client
            .get(self.api_url("/health"))
            .send()
            .await
            .map_err(|e| connectivity_error(BACKEND, &self.base_url, &e))?;

        read_json(BACKEND, response).await
    }
}
