//! # onto-resolve
//!
//! The resolution engine: description enrichment, candidate scoring,
//! multi-ontology orchestration, and the sequential batch runner.
//!
//! Everything here is generic over [`onto_client::OntologySource`], so the
//! engine runs the same against the live service and in-memory fakes.

pub mod batch;
pub mod enrich;
pub mod pacer;
pub mod resolver;
pub mod scoring;

pub use batch::{BatchError, BatchObserver, BatchRunner, BatchSummary, CancelFlag};
pub use enrich::{Enrichment, UnavailableReason, ensure_description};
pub use pacer::Pacer;
pub use resolver::{LookupResult, ResolveOptions, Resolver};
pub use scoring::{ScoredCandidate, better, compare, score};
