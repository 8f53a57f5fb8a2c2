//! Ontology service error types.

use thiserror::Error;

/// Errors that can occur when talking to the ontology service.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// HTTP transport error (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("HTTP {status} {reason} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Canonical status text (e.g., `Not Found`).
        reason: String,
        /// Response body as text. Never parsed as JSON.
        body: String,
    },

    /// Failed to parse a successful response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request could not be built from the given parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl OntologyError {
    /// HTTP status for [`OntologyError::Api`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
