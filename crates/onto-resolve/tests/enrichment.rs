mod common;

use common::{FakeSource, doc};
use onto_resolve::{Enrichment, UnavailableReason, ensure_description};
use pretty_assertions::assert_eq;
use serde_json::json;

const IRI: &str = "http://purl.obolibrary.org/obo/CL_0000084";

#[tokio::test]
async fn inline_description_makes_no_lookup() {
    let source = FakeSource::new();
    let hit = doc(json!({"iri": IRI, "description": ["  A lymphocyte.  "]}));

    let enrichment = ensure_description(&source, &hit, "en").await;

    assert_eq!(enrichment, Enrichment::Inline("  A lymphocyte.  ".into()));
    assert!(!enrichment.looked_up());
    assert_eq!(source.term_lookups(), 0);
}

#[tokio::test]
async fn blank_description_is_fetched_by_iri() {
    let source = FakeSource::new().with_term(
        IRI,
        vec![doc(json!({"iri": IRI, "description": ["Fetched text."]}))],
    );
    let hit = doc(json!({"iri": IRI, "description": "   "}));

    let enrichment = ensure_description(&source, &hit, "en").await;

    assert_eq!(enrichment.text(), "Fetched text.");
    assert!(matches!(enrichment, Enrichment::Fetched(_)));
    assert_eq!(source.term_lookups(), 1);
}

#[tokio::test]
async fn missing_iri_is_unavailable_without_lookup() {
    let source = FakeSource::new();
    let hit = doc(json!({"label": "orphan"}));

    let enrichment = ensure_description(&source, &hit, "en").await;

    assert_eq!(
        enrichment,
        Enrichment::Unavailable {
            reason: UnavailableReason::NoIri
        }
    );
    assert_eq!(source.term_lookups(), 0);
}

#[tokio::test]
async fn failed_lookup_degrades_to_empty() {
    let source = FakeSource::new().failing_term_lookups();
    let hit = doc(json!({"iri": IRI}));

    let enrichment = ensure_description(&source, &hit, "en").await;

    assert!(matches!(
        enrichment,
        Enrichment::Unavailable {
            reason: UnavailableReason::LookupFailed(_)
        }
    ));
    assert_eq!(enrichment.into_text(), "");
    assert_eq!(source.term_lookups(), 1);
}

#[tokio::test]
async fn lookup_without_terms_is_empty() {
    let source = FakeSource::new();
    let hit = doc(json!({"iri": IRI}));

    let enrichment = ensure_description(&source, &hit, "en").await;

    assert_eq!(
        enrichment,
        Enrichment::Unavailable {
            reason: UnavailableReason::Empty
        }
    );
    assert_eq!(enrichment.text(), "");
}
