//! Multi-ontology resolution: search each prefix in turn, enrich every hit,
//! and keep the best-ranked candidate.

use std::collections::HashSet;
use std::time::Duration;

use onto_client::{IndividualQuery, OntologyError, OntologySource, PageInfo, SearchOptions};
use onto_config::ResolveConfig;
use onto_core::batch::{DEFAULT_DELAY, DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE};
use onto_core::{NormalizedConcept, ResolutionResult, normalize};

use crate::enrich::ensure_description;
use crate::pacer::Pacer;
use crate::scoring::ScoredCandidate;

/// Knobs shared by every search in one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub page_size: u32,
    pub language: String,
    /// Pause after each prefix search.
    pub delay: Duration,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            language: DEFAULT_LANGUAGE.to_string(),
            delay: DEFAULT_DELAY,
        }
    }
}

impl From<&ResolveConfig> for ResolveOptions {
    fn from(config: &ResolveConfig) -> Self {
        Self {
            page_size: config.page_size,
            language: config.language.clone(),
            delay: config.delay(),
        }
    }
}

/// Normalized individuals plus the page they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    pub concepts: Vec<NormalizedConcept>,
    pub page: PageInfo,
}

/// Resolves free-text labels against an [`OntologySource`].
pub struct Resolver<'a, S> {
    source: &'a S,
    options: ResolveOptions,
    pacer: Pacer,
}

impl<'a, S: OntologySource> Resolver<'a, S> {
    #[must_use]
    pub const fn new(source: &'a S, options: ResolveOptions) -> Self {
        let pacer = Pacer::new(options.delay);
        Self {
            source,
            options,
            pacer,
        }
    }

    /// The single best concept for `term` across `prefixes`.
    ///
    /// Prefixes are searched sequentially in the order given. Returns
    /// [`ResolutionResult::no_match`] when no prefix yields a document.
    ///
    /// # Errors
    ///
    /// Returns the first search error; earlier results are discarded.
    /// Description lookups never fail the resolution.
    pub async fn resolve_best(
        &self,
        term: &str,
        prefixes: &[String],
    ) -> Result<ResolutionResult, OntologyError> {
        let mut best: Option<ScoredCandidate> = None;
        self.visit_candidates(term, prefixes, |candidate| {
            if candidate.beats(best.as_ref()) {
                best = Some(candidate);
            }
        })
        .await?;

        Ok(best.map_or_else(ResolutionResult::no_match, |winner| {
            ResolutionResult::from_winner(winner.document, &winner.description)
        }))
    }

    /// Every candidate for `term`, best first, truncated to `limit`.
    ///
    /// With `dedupe`, only the best-ranked document per IRI is kept (documents
    /// without an IRI are keyed on their concept id).
    ///
    /// # Errors
    ///
    /// Same as [`Resolver::resolve_best`].
    pub async fn resolve_ranked(
        &self,
        term: &str,
        prefixes: &[String],
        limit: usize,
        dedupe: bool,
    ) -> Result<Vec<ResolutionResult>, OntologyError> {
        let mut candidates = Vec::new();
        self.visit_candidates(term, prefixes, |candidate| candidates.push(candidate))
            .await?;

        candidates.sort_by(|a, b| b.compare(a));

        let mut seen = HashSet::new();
        Ok(candidates
            .into_iter()
            .filter(|c| !dedupe || seen.insert(dedupe_key(c)))
            .take(limit)
            .map(|c| ResolutionResult::from_winner(c.document, &c.description))
            .collect())
    }

    /// Look up individuals by identifier and normalize them.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError`] if the lookup fails.
    pub async fn lookup(&self, query: &IndividualQuery) -> Result<LookupResult, OntologyError> {
        let page = self.source.lookup_individuals(query).await?;
        tracing::debug!(
            kind = %query.identifier.kind(),
            hits = page.individuals.len(),
            "individual lookup"
        );
        Ok(LookupResult {
            concepts: page.individuals.iter().map(normalize::normalize).collect(),
            page: page.page,
        })
    }

    async fn visit_candidates(
        &self,
        term: &str,
        prefixes: &[String],
        mut visit: impl FnMut(ScoredCandidate),
    ) -> Result<(), OntologyError> {
        for prefix in prefixes {
            let options =
                SearchOptions::scoped(prefix, self.options.page_size, &self.options.language);
            let docs = self.source.search(term, &options).await?;
            tracing::debug!(term, prefix = %prefix, hits = docs.len(), "ontology search");

            for doc in docs {
                let description = ensure_description(self.source, &doc, &self.options.language)
                    .await
                    .into_text();
                visit(ScoredCandidate::new(doc, description, term));
            }

            self.pacer.pause().await;
        }
        Ok(())
    }
}

fn dedupe_key(candidate: &ScoredCandidate) -> String {
    if candidate.concept.iri.is_empty() {
        candidate.concept.concept_id.clone()
    } else {
        candidate.concept.iri.clone()
    }
}
