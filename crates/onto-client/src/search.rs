//! Label search scoped to one ontology partition.

use onto_core::RawDocument;
use onto_core::batch::{DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE};

use crate::http::decode_json;
use crate::query::{build_query, endpoint};
use crate::{OlsClient, OntologyError};

#[derive(serde::Deserialize, Default)]
struct SearchResponse {
    #[serde(default)]
    response: Option<SearchDocs>,
}

#[derive(serde::Deserialize, Default)]
struct SearchDocs {
    #[serde(default)]
    docs: Vec<RawDocument>,
}

impl SearchResponse {
    fn into_docs(self) -> Vec<RawDocument> {
        self.response.map(|r| r.docs).unwrap_or_default()
    }
}

/// Paging, scoping, and language for a label search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub page_size: u32,
    pub page_start: u32,
    /// Ontology partition to scope to, e.g. `cl`. `None` searches all.
    pub ontology_prefix: Option<String>,
    pub language: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_start: 0,
            ontology_prefix: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl SearchOptions {
    /// Options scoped to `prefix` with the given page size and language.
    #[must_use]
    pub fn scoped(prefix: &str, page_size: u32, language: &str) -> Self {
        Self {
            page_size,
            page_start: 0,
            ontology_prefix: Some(prefix.to_string()),
            language: language.to_string(),
        }
    }

    fn query(&self, label: &str) -> String {
        build_query([
            ("q", Some(label.to_string())),
            ("size", Some(self.page_size.to_string())),
            ("start", Some(self.page_start.to_string())),
            ("lang", Some(self.language.clone())),
            ("ontology", self.ontology_prefix.clone()),
        ])
    }
}

impl OlsClient {
    /// Search for `label`, returning the documents of `response.docs`.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError`] if the HTTP request fails, the service
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn search(
        &self,
        label: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RawDocument>, OntologyError> {
        let url = endpoint(&self.base_url, "/api/search", &options.query(label));
        let data: SearchResponse = decode_json(self.get(&url).await?).await?;
        Ok(data.into_docs())
    }
}
