//! The seam between the resolution engine and the ontology service.

use std::future::Future;

use onto_core::RawDocument;

use crate::individuals::{IndividualPage, IndividualQuery};
use crate::search::SearchOptions;
use crate::{OlsClient, OntologyError};

/// Read-only access to an ontology service.
///
/// [`OlsClient`] is the HTTP implementation; tests substitute in-memory
/// sources.
pub trait OntologySource {
    /// Label search, returning raw documents.
    fn search(
        &self,
        label: &str,
        options: &SearchOptions,
    ) -> impl Future<Output = Result<Vec<RawDocument>, OntologyError>> + Send;

    /// Term lookup by IRI.
    fn lookup_term(
        &self,
        iri: &str,
        language: &str,
    ) -> impl Future<Output = Result<Vec<RawDocument>, OntologyError>> + Send;

    /// Individual lookup by IRI, short form, or OBO id.
    fn lookup_individuals(
        &self,
        query: &IndividualQuery,
    ) -> impl Future<Output = Result<IndividualPage, OntologyError>> + Send;
}

impl OntologySource for OlsClient {
    async fn search(
        &self,
        label: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RawDocument>, OntologyError> {
        Self::search(self, label, options).await
    }

    async fn lookup_term(
        &self,
        iri: &str,
        language: &str,
    ) -> Result<Vec<RawDocument>, OntologyError> {
        Self::lookup_term(self, iri, language).await
    }

    async fn lookup_individuals(
        &self,
        query: &IndividualQuery,
    ) -> Result<IndividualPage, OntologyError> {
        Self::lookup_individuals(self, query).await
    }
}
