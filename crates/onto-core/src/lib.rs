//! # onto-core
//!
//! Core types, normalization, and export for ontoresolve.
//!
//! This crate provides the foundational types shared across all ontoresolve crates:
//! - [`RawDocument`], the permissive schema every service response item decodes into
//! - Pure normalizers that map any document shape onto a [`NormalizedConcept`]
//! - Resolution results and the "no match" sentinel
//! - Batch job state machine, rows, and term-list ingestion
//! - Identifier helpers (identifier kinds, OBO-id → PURL)
//! - CSV export of batch rows
//! - Cross-cutting error types

pub mod batch;
pub mod concept;
pub mod document;
pub mod errors;
pub mod export;
pub mod identifiers;
pub mod normalize;
pub mod terms;

pub use batch::{BatchJob, BatchRow, BatchState, TermTask};
pub use concept::{NormalizedConcept, ResolutionResult};
pub use document::{RawDocument, TextField};
pub use errors::CoreError;
pub use identifiers::{IdentifierKind, SearchParameters, purl_for_id};
