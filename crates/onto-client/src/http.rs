//! Shared HTTP response helpers for the service client.
//!
//! Centralizes status-code checks (non-success → [`OntologyError::Api`],
//! `Retry-After` logging on 429) and JSON decoding so the per-endpoint
//! modules stay focused on request construction and envelope mapping.

use serde::de::DeserializeOwned;

use crate::error::OntologyError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Any other status becomes
/// [`OntologyError::Api`] carrying the status code, canonical reason, and the
/// body read as text. Rate limiting is not retried here; a 429 is only
/// logged with its `Retry-After` hint.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, OntologyError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!(
            retry_after_secs = parse_retry_after(&resp),
            "ontology service rate limit hit"
        );
    }
    Err(OntologyError::Api {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
        body: resp.text().await.unwrap_or_default(),
    })
}

/// Decode a successful response body as JSON.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, OntologyError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| OntologyError::Parse(e.to_string()))
}

/// Parse the `Retry-After` header as seconds.
fn parse_retry_after(resp: &reqwest::Response) -> Option<u64> {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
}
