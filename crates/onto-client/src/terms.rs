//! Term lookup by IRI.

use onto_core::RawDocument;

use crate::http::decode_json;
use crate::query::{build_query, endpoint};
use crate::{OlsClient, OntologyError};

#[derive(serde::Deserialize)]
struct TermsResponse {
    #[serde(rename = "_embedded", default)]
    embedded: Option<EmbeddedTerms>,
}

#[derive(serde::Deserialize)]
struct EmbeddedTerms {
    #[serde(default)]
    terms: Vec<RawDocument>,
}

impl TermsResponse {
    fn into_terms(self) -> Vec<RawDocument> {
        self.embedded.map(|e| e.terms).unwrap_or_default()
    }
}

impl OlsClient {
    /// Look up terms by IRI, returning `_embedded.terms`.
    ///
    /// The IRI is percent-encoded once as a query value.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError`] if the HTTP request fails, the service
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn lookup_term(
        &self,
        iri: &str,
        language: &str,
    ) -> Result<Vec<RawDocument>, OntologyError> {
        let query = build_query([("iri", Some(iri)), ("lang", Some(language))]);
        let url = endpoint(&self.base_url, "/api/terms", &query);
        let data: TermsResponse = decode_json(self.get(&url).await?).await?;
        Ok(data.into_terms())
    }
}
