use onto_core::{NormalizedConcept, ResolutionResult, purl_for_id};
use serde::Serialize;

/// A concept as printed by `resolve` and `lookup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptView {
    pub ontology: String,
    pub concept_id: String,
    pub label: String,
    pub description: String,
    pub iri: String,
    /// OBO PURL derived from the concept id, `#` when it has no OBO shape.
    pub purl: String,
    pub synonyms: Vec<String>,
}

impl From<&ResolutionResult> for ConceptView {
    fn from(result: &ResolutionResult) -> Self {
        Self {
            ontology: result.ontology_prefix.clone(),
            concept_id: result.concept_id.clone(),
            label: result.label.clone(),
            description: result.description.clone(),
            iri: result.iri.clone(),
            purl: purl_for_id(&result.concept_id),
            synonyms: result.synonyms(),
        }
    }
}

impl From<NormalizedConcept> for ConceptView {
    fn from(concept: NormalizedConcept) -> Self {
        Self {
            purl: purl_for_id(&concept.concept_id),
            ontology: concept.ontology_prefix,
            concept_id: concept.concept_id,
            label: concept.label,
            description: onto_core::normalize::collapse_whitespace(&concept.description),
            iri: concept.iri,
            synonyms: concept.synonyms,
        }
    }
}

#[cfg(test)]
mod tests {
    use onto_core::RawDocument;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolution_result_carries_purl_and_synonyms() {
        let doc: RawDocument = serde_json::from_str(
            r#"{"iri": "http://purl.obolibrary.org/obo/CL_0000084", "label": "T cell",
                "ontology_prefix": "cl", "obo_id": "CL:0000084", "synonym": ["T lymphocyte"]}"#,
        )
        .unwrap();
        let view = ConceptView::from(&ResolutionResult::from_winner(doc, " A  lymphocyte. "));

        assert_eq!(view.ontology, "CL");
        assert_eq!(view.description, "A lymphocyte.");
        assert_eq!(view.purl, "http://purl.obolibrary.org/obo/CL_0000084");
        assert_eq!(view.synonyms, vec!["T lymphocyte"]);
    }

    #[test]
    fn no_match_renders_placeholder_link() {
        let view = ConceptView::from(&ResolutionResult::no_match());
        assert_eq!(view.concept_id, "");
        assert_eq!(view.purl, "#");
    }

    #[test]
    fn short_form_concept_has_no_purl() {
        let view = ConceptView::from(NormalizedConcept {
            concept_id: "CL_0000084".into(),
            ..NormalizedConcept::default()
        });
        assert_eq!(view.purl, "#");
    }
}
