//! Cross-cutting error types for ontoresolve.
//!
//! Service errors (`OntologyError`) and configuration errors (`ConfigError`)
//! are defined in their respective crates. Everything converges into
//! `anyhow::Error` in `onto-cli`.

use thiserror::Error;

/// Errors that can be raised by any ontoresolve crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing exported data failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
