//! Ontology service endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default OLS4 endpoint (no `/api` suffix).
fn default_base_url() -> String {
    String::from("https://www.ebi.ac.uk/ols4")
}

/// Default local proxy endpoint.
fn default_proxy_url() -> String {
    String::from("http://localhost:8787")
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("ontoresolve/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Direct service endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Proxy endpoint, used only when `use_proxy` is set.
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,

    /// Route requests through `proxy_url` instead of `base_url`.
    #[serde(default)]
    pub use_proxy: bool,

    /// Static bearer token. Not required for the public OLS4 instance.
    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            proxy_url: default_proxy_url(),
            use_proxy: false,
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServiceConfig {
    /// The endpoint requests go to, with trailing slashes stripped.
    ///
    /// Falls back to `base_url` when `use_proxy` is set but no proxy URL is
    /// configured.
    #[must_use]
    pub fn active_base_url(&self) -> String {
        let raw = if self.use_proxy && !self.proxy_url.trim().is_empty() {
            &self.proxy_url
        } else {
            &self.base_url
        };
        raw.trim().trim_end_matches('/').to_string()
    }

    /// The bearer token, if one is configured.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }

    /// The API key with all but the last four characters masked.
    #[must_use]
    pub fn masked_api_key(&self) -> String {
        let Some(key) = self.bearer_token() else {
            return String::new();
        };
        let visible: String = key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("****{visible}")
    }
}
