//! Individual lookup by IRI, short form, or OBO id.

use onto_core::{IdentifierKind, RawDocument, SearchParameters};
use serde::{Deserialize, Serialize};

use crate::http::decode_json;
use crate::query::{build_query, endpoint};
use crate::{OlsClient, OntologyError};

#[derive(Deserialize)]
struct IndividualsResponse {
    #[serde(rename = "_embedded", default)]
    embedded: Option<EmbeddedIndividuals>,
    #[serde(default)]
    page: PageInfo,
}

#[derive(Deserialize)]
struct EmbeddedIndividuals {
    #[serde(default)]
    individuals: Vec<RawDocument>,
}

/// Pagination metadata returned with individual lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub total_elements: Option<u64>,
}

/// One page of individuals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndividualPage {
    pub individuals: Vec<RawDocument>,
    pub page: PageInfo,
}

/// The identifier an individual lookup is keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Iri(String),
    ShortForm(String),
    OboId(String),
}

impl Identifier {
    /// Build an identifier of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::InvalidRequest`] for [`IdentifierKind::Label`],
    /// which is resolved by search rather than looked up.
    pub fn new(kind: IdentifierKind, value: impl Into<String>) -> Result<Self, OntologyError> {
        let value = value.into();
        match kind {
            IdentifierKind::Iri => Ok(Self::Iri(value)),
            IdentifierKind::ShortForm => Ok(Self::ShortForm(value)),
            IdentifierKind::OboId => Ok(Self::OboId(value)),
            IdentifierKind::Label => Err(OntologyError::InvalidRequest(
                "labels are resolved by search, not individual lookup".into(),
            )),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> IdentifierKind {
        match self {
            Self::Iri(_) => IdentifierKind::Iri,
            Self::ShortForm(_) => IdentifierKind::ShortForm,
            Self::OboId(_) => IdentifierKind::OboId,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Iri(v) | Self::ShortForm(v) | Self::OboId(v) => v,
        }
    }
}

/// Parameters for an individual lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualQuery {
    pub identifier: Identifier,
    pub language: String,
    pub page_size: Option<u32>,
    pub page_index: Option<u32>,
}

impl IndividualQuery {
    /// Build a lookup from user search parameters.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::InvalidRequest`] if the parameters describe a
    /// label search or carry no identifier value.
    pub fn from_params(params: &SearchParameters) -> Result<Self, OntologyError> {
        let value = params
            .query_value()
            .map_err(|e| OntologyError::InvalidRequest(e.to_string()))?;
        Ok(Self {
            identifier: Identifier::new(params.identifier_kind, value)?,
            language: params.language.clone(),
            page_size: params.page_size,
            page_index: params.page_index,
        })
    }

    fn query(&self) -> String {
        let kind = self.identifier.kind();
        build_query([
            (kind.as_str(), Some(self.identifier.value().to_string())),
            ("lang", Some(self.language.clone())),
            ("size", self.page_size.map(|s| s.to_string())),
            ("page", self.page_index.map(|p| p.to_string())),
        ])
    }
}

impl OlsClient {
    /// Look up individuals by identifier, returning `_embedded.individuals`
    /// and the page metadata.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError`] if the HTTP request fails, the service
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn lookup_individuals(
        &self,
        query: &IndividualQuery,
    ) -> Result<IndividualPage, OntologyError> {
        let url = endpoint(&self.base_url, "/api/individuals", &query.query());
        let data: IndividualsResponse = decode_json(self.get(&url).await?).await?;
        Ok(IndividualPage {
            individuals: data.embedded.map(|e| e.individuals).unwrap_or_default(),
            page: data.page,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "_embedded": {
            "individuals": [
                {
                    "iri": "http://purl.obolibrary.org/obo/CL_0000084",
                    "label": "T cell",
                    "ontology_name": "cl",
                    "short_form": "CL_0000084",
                    "synonyms": ["T lymphocyte", "T-cell"]
                }
            ]
        },
        "page": {"size": 20, "totalElements": 1, "totalPages": 1, "number": 0}
    }"#;

    #[test]
    fn parse_individuals_response() {
        let data: IndividualsResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(
            data.page,
            PageInfo {
                number: Some(0),
                total_pages: Some(1),
                size: Some(20),
                total_elements: Some(1),
            }
        );
        let individuals = data.embedded.unwrap().individuals;
        assert_eq!(
            onto_core::normalize::synonyms(&individuals[0]),
            vec!["T lymphocyte", "T-cell"]
        );
    }

    #[test]
    fn missing_page_defaults() {
        let data: IndividualsResponse = serde_json::from_str("{}").unwrap();
        assert!(data.embedded.is_none());
        assert_eq!(data.page, PageInfo::default());
    }

    #[test]
    fn query_uses_identifier_parameter_name() {
        let query = IndividualQuery {
            identifier: Identifier::OboId("CL:0000084".into()),
            language: "en".into(),
            page_size: Some(20),
            page_index: Some(0),
        };
        assert_eq!(query.query(), "obo_id=CL%3A0000084&lang=en&size=20&page=0");
    }

    #[test]
    fn query_omits_unset_paging() {
        let query = IndividualQuery {
            identifier: Identifier::ShortForm("CL_0000084".into()),
            language: "en".into(),
            page_size: None,
            page_index: None,
        };
        assert_eq!(query.query(), "short_form=CL_0000084&lang=en");
    }

    #[test]
    fn label_params_are_rejected() {
        let params = SearchParameters::for_label("T cell", "en");
        assert!(matches!(
            IndividualQuery::from_params(&params),
            Err(OntologyError::InvalidRequest(_))
        ));
    }

    #[test]
    fn from_params_carries_paging() {
        let mut params =
            SearchParameters::for_identifier(IdentifierKind::Iri, "http://x/CL_1", "en");
        params.page_size = Some(5);
        let query = IndividualQuery::from_params(&params).unwrap();
        assert_eq!(query.identifier, Identifier::Iri("http://x/CL_1".into()));
        assert_eq!(query.page_size, Some(5));
        assert_eq!(query.page_index, None);
    }
}
