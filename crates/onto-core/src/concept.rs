//! Canonical concept records and resolution results.

use serde::{Deserialize, Serialize};

use crate::document::RawDocument;
use crate::normalize;

/// A concept normalized from any document shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedConcept {
    /// Uppercased ontology prefix (e.g., `CL`, `GO`).
    pub ontology_prefix: String,
    /// OBO id, short form, or IRI tail. May be empty.
    pub concept_id: String,
    pub label: String,
    pub description: String,
    pub iri: String,
    pub synonyms: Vec<String>,
}

/// The single best concept chosen for a term.
///
/// [`ResolutionResult::no_match`] is the sentinel for "nothing found": every
/// string field is empty and there is no source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub ontology_prefix: String,
    pub concept_id: String,
    pub label: String,
    /// Whitespace-collapsed, trimmed description.
    pub description: String,
    pub iri: String,
    pub source_document: Option<RawDocument>,
}

impl ResolutionResult {
    /// The "no match" sentinel.
    #[must_use]
    pub fn no_match() -> Self {
        Self::default()
    }

    /// Build a result from the winning document and the description used to
    /// rank it.
    #[must_use]
    pub fn from_winner(doc: RawDocument, description: &str) -> Self {
        Self {
            ontology_prefix: normalize::ontology_prefix(&doc),
            concept_id: normalize::concept_id(&doc),
            label: doc.label_or_empty().to_string(),
            description: normalize::collapse_whitespace(description),
            iri: doc.iri.clone().unwrap_or_default(),
            source_document: Some(doc),
        }
    }

    /// Whether a concept was found.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.source_document.is_some()
    }

    /// Synonyms of the source document, if any.
    #[must_use]
    pub fn synonyms(&self) -> Vec<String> {
        self.source_document
            .as_ref()
            .map(normalize::synonyms)
            .unwrap_or_default()
    }
}
