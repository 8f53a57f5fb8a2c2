//! Raw response documents from the ontology service.
//!
//! The three service operations return items with overlapping but
//! inconsistent fields:
//!
//! ```text
//! search      → ontology_prefix, obo_id, short_form, iri, label,
//!               description: [..], synonym: [..], is_obsolete
//! terms       → same as search, description may be a list
//! individuals → ontology_prefix | ontology_name, synonyms: [..]
//! ```
//!
//! A single permissive schema with named optional fields covers all of
//! them. Unknown fields are preserved in [`RawDocument::extra`] so the
//! source document can be echoed back verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A text-ish field that the service emits either as a plain string or as a
/// list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextField {
    One(String),
    Many(Vec<String>),
    /// Anything else (numbers, objects, mixed lists). Treated as absent.
    Other(Value),
}

impl TextField {
    /// First element of a list, or the string itself.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(text) => Some(text.as_str()),
            Self::Many(items) => items.first().map(String::as_str),
            Self::Other(_) => None,
        }
    }

    /// All values as a list; a plain string becomes a single-element list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::One(text) if text.is_empty() => Vec::new(),
            Self::One(text) => vec![text.clone()],
            Self::Many(items) => items.clone(),
            Self::Other(_) => Vec::new(),
        }
    }
}

/// An untyped response item from any of the three service operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<TextField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ontology_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ontology_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_form: Option<String>,
    /// Synonyms as emitted by search and term lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonym: Option<TextField>,
    /// Synonyms as emitted by individual lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<TextField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_obsolete: Option<bool>,
    /// Every field not named above, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawDocument {
    /// Whether the source ontology flagged this concept as deprecated.
    #[must_use]
    pub fn is_obsolete(&self) -> bool {
        self.is_obsolete.unwrap_or(false)
    }

    /// The label, or `""` if absent.
    #[must_use]
    pub fn label_or_empty(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    /// The IRI if present and non-empty.
    #[must_use]
    pub fn iri(&self) -> Option<&str> {
        self.iri.as_deref().filter(|iri| !iri.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SEARCH_DOC: &str = r#"{
        "iri": "http://purl.obolibrary.org/obo/CL_0000084",
        "label": "T cell",
        "description": ["A type of lymphocyte whose defining characteristic is..."],
        "ontology_prefix": "cl",
        "obo_id": "CL:0000084",
        "short_form": "CL_0000084",
        "synonym": ["T-cell", "T lymphocyte"],
        "is_obsolete": false,
        "type": "class"
    }"#;

    const INDIVIDUAL_DOC: &str = r#"{
        "iri": "http://example.org/ind/42",
        "label": "sample individual",
        "description": "plain text",
        "ontology_name": "efo",
        "synonyms": ["sample"]
    }"#;

    #[test]
    fn parses_search_shape() {
        let doc: RawDocument = serde_json::from_str(SEARCH_DOC).unwrap();
        assert_eq!(doc.label.as_deref(), Some("T cell"));
        assert_eq!(doc.obo_id.as_deref(), Some("CL:0000084"));
        assert!(!doc.is_obsolete());
        assert_eq!(
            doc.synonym.as_ref().map(TextField::to_vec),
            Some(vec!["T-cell".to_string(), "T lymphocyte".to_string()])
        );
        assert_eq!(doc.extra.get("type"), Some(&Value::from("class")));
    }

    #[test]
    fn parses_individual_shape() {
        let doc: RawDocument = serde_json::from_str(INDIVIDUAL_DOC).unwrap();
        assert_eq!(doc.ontology_name.as_deref(), Some("efo"));
        assert!(doc.ontology_prefix.is_none());
        assert_eq!(doc.description.as_ref().and_then(TextField::first), Some("plain text"));
        assert!(doc.is_obsolete.is_none());
    }

    #[test]
    fn null_description_is_absent() {
        let doc: RawDocument = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert!(doc.description.is_none());
    }

    #[test]
    fn odd_description_shape_does_not_fail() {
        let doc: RawDocument = serde_json::from_str(r#"{"description": 7}"#).unwrap();
        assert_eq!(doc.description.as_ref().and_then(TextField::first), None);
    }

    #[test]
    fn unknown_fields_survive_serialization() {
        let doc: RawDocument = serde_json::from_str(SEARCH_DOC).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["type"], "class");
        assert_eq!(value["short_form"], "CL_0000084");
    }
}
