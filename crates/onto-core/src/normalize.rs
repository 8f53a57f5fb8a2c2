//! Pure normalizers shared by every document shape.
//!
//! Search hits, term lookups, and individual lookups all pass through the same
//! fallback functions here; no call site carries its own field logic.

use crate::concept::NormalizedConcept;
use crate::document::{RawDocument, TextField};

/// Uppercased ontology prefix: `ontology_prefix`, else `ontology_name`, else `""`.
#[must_use]
pub fn ontology_prefix(doc: &RawDocument) -> String {
    first_non_empty([doc.ontology_prefix.as_deref(), doc.ontology_name.as_deref()])
        .unwrap_or_default()
        .to_uppercase()
}

/// Concept identifier: OBO id, else short form, else the last IRI path
/// segment, else `""`.
#[must_use]
pub fn concept_id(doc: &RawDocument) -> String {
    first_non_empty([
        doc.obo_id.as_deref(),
        doc.short_form.as_deref(),
        doc.iri().and_then(iri_tail),
    ])
    .unwrap_or_default()
    .to_string()
}

/// Inline description: first list element, else the plain string, else `""`.
#[must_use]
pub fn description(doc: &RawDocument) -> String {
    description_of(doc.description.as_ref())
}

/// Description fallback applied to a bare description field.
#[must_use]
pub fn description_of(field: Option<&TextField>) -> String {
    field
        .and_then(TextField::first)
        .unwrap_or_default()
        .to_string()
}

/// Synonyms from whichever of `synonym` / `synonyms` is populated.
#[must_use]
pub fn synonyms(doc: &RawDocument) -> Vec<String> {
    [doc.synonym.as_ref(), doc.synonyms.as_ref()]
        .into_iter()
        .flatten()
        .map(TextField::to_vec)
        .find(|values| !values.is_empty())
        .unwrap_or_default()
}

/// Map any document shape onto the canonical concept record.
#[must_use]
pub fn normalize(doc: &RawDocument) -> NormalizedConcept {
    NormalizedConcept {
        ontology_prefix: ontology_prefix(doc),
        concept_id: concept_id(doc),
        label: doc.label_or_empty().to_string(),
        description: description(doc),
        iri: doc.iri.clone().unwrap_or_default(),
        synonyms: synonyms(doc),
    }
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn iri_tail(iri: &str) -> Option<&str> {
    iri.rsplit('/').next()
}

fn first_non_empty<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|value| !value.is_empty())
}
