#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use onto_client::{IndividualPage, IndividualQuery, OntologyError, OntologySource, SearchOptions};
use onto_core::RawDocument;

/// A recorded call against [`FakeSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search { label: String, prefix: Option<String> },
    LookupTerm { iri: String },
    Individuals { value: String },
}

/// In-memory ontology source with canned answers keyed by label and prefix.
#[derive(Default)]
pub struct FakeSource {
    search: HashMap<(String, String), Vec<RawDocument>>,
    failing_labels: HashSet<String>,
    terms: HashMap<String, Vec<RawDocument>>,
    failing_term_lookups: bool,
    individuals: IndividualPage,
    calls: Mutex<Vec<Call>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, label: &str, prefix: &str, docs: Vec<RawDocument>) -> Self {
        self.search.insert((label.into(), prefix.into()), docs);
        self
    }

    pub fn failing_search(mut self, label: &str) -> Self {
        self.failing_labels.insert(label.into());
        self
    }

    pub fn with_term(mut self, iri: &str, docs: Vec<RawDocument>) -> Self {
        self.terms.insert(iri.into(), docs);
        self
    }

    pub fn failing_term_lookups(mut self) -> Self {
        self.failing_term_lookups = true;
        self
    }

    pub fn with_individuals(mut self, page: IndividualPage) -> Self {
        self.individuals = page;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn term_lookups(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::LookupTerm { .. }))
            .count()
    }

    pub fn searched_prefixes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Search { prefix, .. } => prefix,
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error() -> OntologyError {
    OntologyError::Api {
        status: 500,
        reason: "Internal Server Error".into(),
        body: "boom".into(),
    }
}

impl OntologySource for FakeSource {
    async fn search(
        &self,
        label: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RawDocument>, OntologyError> {
        self.record(Call::Search {
            label: label.into(),
            prefix: options.ontology_prefix.clone(),
        });
        if self.failing_labels.contains(label) {
            return Err(server_error());
        }
        let prefix = options.ontology_prefix.clone().unwrap_or_default();
        Ok(self
            .search
            .get(&(label.to_string(), prefix))
            .cloned()
            .unwrap_or_default())
    }

    async fn lookup_term(
        &self,
        iri: &str,
        _language: &str,
    ) -> Result<Vec<RawDocument>, OntologyError> {
        self.record(Call::LookupTerm { iri: iri.into() });
        if self.failing_term_lookups {
            return Err(server_error());
        }
        Ok(self.terms.get(iri).cloned().unwrap_or_default())
    }

    async fn lookup_individuals(
        &self,
        query: &IndividualQuery,
    ) -> Result<IndividualPage, OntologyError> {
        self.record(Call::Individuals {
            value: query.identifier.value().into(),
        });
        Ok(self.individuals.clone())
    }
}

/// Build a document from inline JSON.
pub fn doc(json: serde_json::Value) -> RawDocument {
    serde_json::from_value(json).unwrap()
}
