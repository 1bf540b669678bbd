//! CSV-analysis backend client.

use super::config::{CSV_API_BASE, CsvConfig};
use crate::http::{connectivity_error, read_json};
use bizlens_core::{BizlensError, Result};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

const BACKEND: &str = "CSV analysis";

/// Client for the CSV-analysis agent backend.
///
/// The upload call creates an analysis session on the backend; the returned
/// `session_id` is an opaque token the caller passes back on every follow-up
/// chat turn. The gateway holds no session state of its own.
///
/// # Example
///
/// ```rust,ignore
/// use bizlens_gateway::csv::{CsvClient, CsvConfig};
///
/// let client = CsvClient::new(CsvConfig::from_env())?;
/// let analysis = client.upload_csv("sales.csv", bytes).await?;
/// let session_id = analysis["session_id"].as_str().unwrap_or_default();
/// let answer = client.chat(session_id, "which region sells best?").await?;
/// ```
pub struct CsvClient {
    client: Client,
    base_url: String,
}

impl CsvClient {
    /// Create a new CSV backend client.
    pub fn new(config: CsvConfig) -> Result<Self> {
        let CsvConfig { base_url, timeout } = config;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BizlensError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url: base_url.unwrap_or_else(|| CSV_API_BASE.to_string()) })
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Upload a CSV for analysis: `POST /upload_csv` (multipart).
    ///
    /// The response carries a `session_id` plus the initial analysis
    /// (insights, anomalies, chart specifications); the gateway returns it
    /// without inspection.
    pub async fn upload_csv(&self, file_name: &str, bytes: Vec<u8>) -> Result<Value> {
        tracing::debug!(file_name, size = bytes.len(), "uploading CSV");

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|e| BizlensError::Config(format!("invalid upload part: {e}")))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.api_url("/upload_csv"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| connectivity_error(BACKEND, &self.base_url, &e))?;

        read_json(BACKEND, response).await
    }

    /// Ask a follow-up question against an uploaded CSV: `POST /chat`
    /// (form-encoded `session_id` + `user_message`).
    pub async fn chat(&self, session_id: &str, user_message: &str) -> Result<Value> {
        tracing::debug!(session_id, "sending CSV chat turn");

        let response = self
            .client
            .post(self.api_url("/chat"))
            .form(&[("session_id", session_id), ("user_message", user_message)])
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
