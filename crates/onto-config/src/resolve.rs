//! Resolution defaults: language, paging, pacing, and ontology selection.

use std::time::Duration;

use onto_core::batch::{DEFAULT_DELAY, DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

fn default_language() -> String {
    String::from(DEFAULT_LANGUAGE)
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[allow(clippy::cast_possible_truncation)]
const fn default_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

/// Ontology partitions searched when none are given on the command line.
fn default_ontologies() -> Vec<String> {
    vec!["cl".into(), "go".into(), "ncit".into()]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolveConfig {
    /// Language code sent with every request.
    #[serde(default = "default_language")]
    pub language: String,

    /// Page size per search call.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Pause after each ontology search, in milliseconds. `0` disables pacing.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Default ontology prefixes.
    #[serde(default = "default_ontologies")]
    pub ontologies: Vec<String>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            page_size: default_page_size(),
            delay_ms: default_delay_ms(),
            ontologies: default_ontologies(),
        }
    }
}

impl ResolveConfig {
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
