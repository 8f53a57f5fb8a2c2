//! Candidate scoring and the total order used to pick one winner.
//!
//! Signals are independent and additive:
//!
//! | signal        | condition                                | weight |
//! |---------------|------------------------------------------|--------|
//! | exact match   | label equals target, case-insensitive    | +20    |
//! | CL            | ontology prefix is `CL`                  | +5     |
//! | GO            | ontology prefix is `GO`                  | +4     |
//! | NCIT          | ontology prefix is `NCIT`                | +3     |
//! | not obsolete  | obsolete flag is unset or false          | +1     |
//!
//! An exact match (20) outranks every combination of the other signals
//! (5 + 4 + 3 + 1 = 13).
//!
//! Ties on score go to the longer trimmed description, then to the
//! lexicographically smaller concept id. A term imported into several
//! ontologies shares one concept id, so the smaller ontology prefix and then
//! the smaller IRI settle what is left. Arrival order never decides.

use std::cmp::Ordering;

use onto_core::normalize::{self, concept_id};
use onto_core::{NormalizedConcept, RawDocument};

pub const EXACT_MATCH_WEIGHT: u32 = 20;
pub const NOT_OBSOLETE_WEIGHT: u32 = 1;

/// Ontology partitions preferred when labels tie.
pub const PREFERRED_SOURCES: [(&str, u32); 3] = [("CL", 5), ("GO", 4), ("NCIT", 3)];

/// Score `doc` against the label being resolved.
#[must_use]
pub fn score(doc: &RawDocument, target: &str) -> u32 {
    let exact = doc.label_or_empty().to_lowercase() == target.to_lowercase();
    let prefix = normalize::ontology_prefix(doc);
    let preferred = PREFERRED_SOURCES
        .iter()
        .find(|(source, _)| *source == prefix)
        .map_or(0, |(_, weight)| *weight);

    let mut total = preferred;
    if exact {
        total += EXACT_MATCH_WEIGHT;
    }
    if !doc.is_obsolete() {
        total += NOT_OBSOLETE_WEIGHT;
    }
    total
}

/// Order `a` relative to `b`: `Greater` means `a` is the better match.
#[must_use]
pub fn compare(
    a: &RawDocument,
    b: &RawDocument,
    target: &str,
    desc_a: &str,
    desc_b: &str,
) -> Ordering {
    let (prefix_a, prefix_b) = (normalize::ontology_prefix(a), normalize::ontology_prefix(b));
    let (id_a, id_b) = (concept_id(a), concept_id(b));
    rank(
        &RankKey {
            score: score(a, target),
            description: desc_a,
            concept_id: &id_a,
            ontology_prefix: &prefix_a,
            iri: a.iri().unwrap_or_default(),
        },
        &RankKey {
            score: score(b, target),
            description: desc_b,
            concept_id: &id_b,
            ontology_prefix: &prefix_b,
            iri: b.iri().unwrap_or_default(),
        },
    )
}

/// Whether `candidate` should replace `best`.
///
/// With no current best the candidate always wins.
#[must_use]
pub fn better(
    candidate: &RawDocument,
    best: Option<&RawDocument>,
    target: &str,
    candidate_desc: &str,
    best_desc: &str,
) -> bool {
    best.is_none_or(|best| {
        compare(candidate, best, target, candidate_desc, best_desc) == Ordering::Greater
    })
}

struct RankKey<'a> {
    score: u32,
    description: &'a str,
    concept_id: &'a str,
    ontology_prefix: &'a str,
    iri: &'a str,
}

fn rank(a: &RankKey<'_>, b: &RankKey<'_>) -> Ordering {
    a.score
        .cmp(&b.score)
        .then_with(|| description_len(a.description).cmp(&description_len(b.description)))
        // Smaller wins from here on, so the comparisons are reversed.
        .then_with(|| b.concept_id.cmp(a.concept_id))
        .then_with(|| b.ontology_prefix.cmp(a.ontology_prefix))
        .then_with(|| b.iri.cmp(a.iri))
}

fn description_len(description: &str) -> usize {
    description.trim().chars().count()
}

/// A candidate with everything needed to rank it precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub document: RawDocument,
    pub concept: NormalizedConcept,
    /// The description used for tie-breaking (inline or enriched).
    pub description: String,
    pub score: u32,
}

impl ScoredCandidate {
    #[must_use]
    pub fn new(document: RawDocument, description: String, target: &str) -> Self {
        let score = score(&document, target);
        let concept = normalize::normalize(&document);
        Self {
            document,
            concept,
            description,
            score,
        }
    }

    /// Order `self` relative to `other`: `Greater` means `self` is better.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        rank(&self.rank_key(), &other.rank_key())
    }

    fn rank_key(&self) -> RankKey<'_> {
        RankKey {
            score: self.score,
            description: &self.description,
            concept_id: &self.concept.concept_id,
            ontology_prefix: &self.concept.ontology_prefix,
            iri: &self.concept.iri,
        }
    }

    /// Whether `self` should replace `best`.
    #[must_use]
    pub fn beats(&self, best: Option<&Self>) -> bool {
        best.is_none_or(|best| self.compare(best) == Ordering::Greater)
    }
}
