//! # onto-client
//!
//! Read-only HTTP client for an OLS4-compatible ontology service.
//!
//! Three operations are exposed, each a single GET with an optional static
//! bearer token:
//! - label search scoped to one ontology partition (`/api/search`)
//! - term lookup by IRI (`/api/terms`)
//! - individual lookup by IRI, short form, or OBO id (`/api/individuals`)
//!
//! Response envelopes are unwrapped here; the items themselves are returned
//! as [`onto_core::RawDocument`] and normalized by `onto_core::normalize`.
//! The [`OntologySource`] trait is the seam the resolution engine depends on.

pub mod individuals;
pub mod query;
pub mod search;
pub mod source;
pub mod terms;

mod error;
mod http;

pub use error::OntologyError;
pub use individuals::{Identifier, IndividualPage, IndividualQuery, PageInfo};
pub use search::SearchOptions;
pub use source::OntologySource;

use std::time::Duration;

use onto_config::ServiceConfig;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the ontology service.
#[derive(Debug, Clone)]
pub struct OlsClient {
    http: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
}

impl OlsClient {
    /// Create a client from service configuration.
    ///
    /// The active endpoint (direct or proxy) is resolved once here.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ServiceConfig) -> Result<Self, OntologyError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            http,
            base_url: config.active_base_url(),
            bearer: config.bearer_token().map(str::to_string),
        })
    }

    /// The endpoint all requests go to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET with the optional bearer token and check the status.
    async fn get(&self, url: &str) -> Result<reqwest::Response, OntologyError> {
        tracing::debug!(%url, "ontology request");
        let mut request = self.http.get(url);
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }
        crate::http::check_response(request.send().await?).await
    }
}
