//! Identifier kinds, search parameters, and the OBO-id → PURL convention.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Base of the canonical dereferenceable URL for OBO identifiers.
pub const PURL_BASE: &str = "http://purl.obolibrary.org/obo/";

/// Link emitted for identifiers that do not follow the `PREFIX:NUMBER` form.
pub const PLACEHOLDER_LINK: &str = "#";

/// How the user's query value should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Free-text label, resolved across ontology partitions.
    #[default]
    Label,
    /// Full IRI, e.g. `http://purl.obolibrary.org/obo/CL_0000084`.
    Iri,
    /// `PREFIX_NUMBER`, e.g. `CL_0000084`.
    ShortForm,
    /// `PREFIX:NUMBER`, e.g. `CL:0000084`.
    OboId,
}

impl IdentifierKind {
    /// Return the string representation, which is also the query parameter
    /// name used by individual lookups.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Iri => "iri",
            Self::ShortForm => "short_form",
            Self::OboId => "obo_id",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "label" => Ok(Self::Label),
            "iri" => Ok(Self::Iri),
            "short_form" | "short-form" | "shortform" => Ok(Self::ShortForm),
            "obo_id" | "obo-id" | "oboid" => Ok(Self::OboId),
            other => Err(CoreError::Validation(format!(
                "unknown identifier kind '{other}' (expected label, iri, short_form, or obo_id)"
            ))),
        }
    }
}

/// A user query: either a label to resolve or an identifier to look up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    pub label: Option<String>,
    pub identifier_kind: IdentifierKind,
    pub identifier_value: Option<String>,
    pub language: String,
    pub page_size: Option<u32>,
    pub page_index: Option<u32>,
}

impl SearchParameters {
    /// Parameters for a label resolution.
    #[must_use]
    pub fn for_label(label: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            identifier_kind: IdentifierKind::Label,
            identifier_value: None,
            language: language.into(),
            page_size: None,
            page_index: None,
        }
    }

    /// Parameters for an identifier lookup.
    #[must_use]
    pub fn for_identifier(
        kind: IdentifierKind,
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            label: None,
            identifier_kind: kind,
            identifier_value: Some(value.into()),
            language: language.into(),
            page_size: None,
            page_index: None,
        }
    }

    /// The value that is meaningful for the identifier kind, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the meaningful value is missing
    /// or blank.
    pub fn query_value(&self) -> Result<&str, CoreError> {
        let value = match self.identifier_kind {
            IdentifierKind::Label => self.label.as_deref(),
            _ => self.identifier_value.as_deref(),
        };
        value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| CoreError::Validation("Please enter a value to search.".into()))
    }
}

/// Build a PURL from an OBO-style id: `CL:0000084` →
/// `http://purl.obolibrary.org/obo/CL_0000084`.
///
/// Ids that do not start with `LETTERS:DIGIT` produce [`PLACEHOLDER_LINK`].
#[must_use]
pub fn purl_for_id(id: &str) -> String {
    let Some((prefix, rest)) = id.split_once(':') else {
        return PLACEHOLDER_LINK.to_string();
    };
    let prefix_ok = !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphabetic());
    let number_ok = rest.starts_with(|c: char| c.is_ascii_digit());
    if !prefix_ok || !number_ok {
        return PLACEHOLDER_LINK.to_string();
    }
    let number = rest.split(':').next().unwrap_or(rest);
    format!("{PURL_BASE}{prefix}_{number}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("CL:0000084", "http://purl.obolibrary.org/obo/CL_0000084")]
    #[case("GO:0008150", "http://purl.obolibrary.org/obo/GO_0008150")]
    #[case("NCIT:C12345", "#")]
    #[case("CL_0000084", "#")]
    #[case(":0001", "#")]
    #[case("", "#")]
    fn purl_convention(#[case] id: &str, #[case] expected: &str) {
        assert_eq!(purl_for_id(id), expected);
    }

    #[rstest]
    #[case("label", IdentifierKind::Label)]
    #[case("IRI", IdentifierKind::Iri)]
    #[case("short-form", IdentifierKind::ShortForm)]
    #[case("obo_id", IdentifierKind::OboId)]
    fn parses_identifier_kinds(#[case] input: &str, #[case] expected: IdentifierKind) {
        assert_eq!(input.parse::<IdentifierKind>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_identifier_kind() {
        assert!(matches!(
            "curie".parse::<IdentifierKind>(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn query_value_follows_kind() {
        let params = SearchParameters::for_label("  T cell ", "en");
        assert_eq!(params.query_value().unwrap(), "T cell");

        let params = SearchParameters::for_identifier(IdentifierKind::OboId, "CL:0000084", "en");
        assert_eq!(params.query_value().unwrap(), "CL:0000084");
    }

    #[test]
    fn blank_query_value_is_rejected() {
        let params = SearchParameters::for_label("   ", "en");
        assert!(params.query_value().is_err());
    }
}
