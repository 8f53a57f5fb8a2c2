//! Description enrichment for search hits that arrive without one.
//!
//! Search documents often omit `description`. When that happens the term
//! endpoint is asked for it by IRI. Enrichment never fails: a lookup error
//! degrades to an empty description so one bad hit cannot sink a search.

use onto_client::OntologySource;
use onto_core::RawDocument;
use onto_core::normalize;

/// Why no description could be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The document has no IRI to look up.
    NoIri,
    /// The lookup succeeded but returned no description.
    Empty,
    /// The lookup failed; the error text is kept for logging.
    LookupFailed(String),
}

/// Outcome of [`ensure_description`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrichment {
    /// The document already carried a non-blank description.
    Inline(String),
    /// The description came from a term lookup.
    Fetched(String),
    /// No description is available.
    Unavailable { reason: UnavailableReason },
}

impl Enrichment {
    /// The description text, `""` when unavailable.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Inline(text) | Self::Fetched(text) => text,
            Self::Unavailable { .. } => "",
        }
    }

    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Inline(text) | Self::Fetched(text) => text,
            Self::Unavailable { .. } => String::new(),
        }
    }

    /// Whether a network lookup was made.
    #[must_use]
    pub const fn looked_up(&self) -> bool {
        matches!(
            self,
            Self::Fetched(_)
                | Self::Unavailable {
                    reason: UnavailableReason::Empty | UnavailableReason::LookupFailed(_)
                }
        )
    }
}

/// Return `doc`'s description, fetching it by IRI when the inline one is
/// missing or blank.
///
/// At most one term lookup is made, and none when the inline description is
/// non-blank. The inline text is returned unchanged.
pub async fn ensure_description<S: OntologySource>(
    source: &S,
    doc: &RawDocument,
    language: &str,
) -> Enrichment {
    let inline = normalize::description(doc);
    if !inline.trim().is_empty() {
        return Enrichment::Inline(inline);
    }

    let Some(iri) = doc.iri() else {
        return unavailable(UnavailableReason::NoIri);
    };

    match source.lookup_term(iri, language).await {
        Ok(terms) => {
            let fetched = normalize::description_of(
                terms.first().and_then(|term| term.description.as_ref()),
            );
            if fetched.is_empty() {
                unavailable(UnavailableReason::Empty)
            } else {
                Enrichment::Fetched(fetched)
            }
        }
        Err(error) => unavailable(UnavailableReason::LookupFailed(error.to_string())),
    }
}

fn unavailable(reason: UnavailableReason) -> Enrichment {
    tracing::debug!(?reason, "description unavailable");
    Enrichment::Unavailable { reason }
}
