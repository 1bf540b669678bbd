//! Shared HTTP plumbing for both backend clients.
//!
//! Every gateway call resolves through the same two-sided contract: a 2xx
//! body is parsed as JSON and handed back verbatim, anything else becomes a
//! typed failure. Payload structure is the presentation layer's concern.

use bizlens_core::{BizlensError, Result};
use reqwest::Response;
use serde_json::Value;

/// Turn a transport-level failure (connection refused, DNS, timeout expiry)
/// into a [`BizlensError::Connectivity`] naming the backend that could not
/// be reached.
pub(crate) fn connectivity_error(
    backend: &str,
    base_url: &str,
    err: &reqwest::Error,
) -> BizlensError {
    tracing::debug!(backend, base_url, error = %err, "backend unreachable");
    BizlensError::Connectivity(format!(
        "Cannot reach the {backend} backend at {base_url}. Check that the service is running."
    ))
}

/// Resolve a backend response.
///
/// Non-success statuses are reported as [`BizlensError::Remote`] carrying the
/// `detail` message from the backend's JSON error body when one is present,
/// else the plain status line.
pub(crate) async fn read_json(backend: &str, response: Response) -> Result<Value> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<Value>()
            .await
            .map_err(|e| BizlensError::Remote(format!("invalid JSON from {backend} backend: {e}")));
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<Value>(&body) {
        Ok(parsed) => match parsed.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(detail) => detail.to_string(),
            None => status_line(status),
        },
        Err(_) => {
            tracing::warn!(backend, %status, "error body was not JSON");
            status_line(status)
        }
    };

    Err(BizlensError::Remote(message))
}

fn status_line(status: reqwest::StatusCode) -> String {
    format!("{} {}", status.as_u16(), status.canonical_reason().unwrap_or("Unknown Error"))
}
