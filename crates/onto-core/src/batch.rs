//! Batch job state, rows, and the sequential task cursor.
//!
//! A job yields exactly one [`TermTask`] at a time: the next task is only
//! available once the previous term's row (success or failure) has been
//! recorded, which keeps rows in input order without any locking.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::concept::ResolutionResult;
use crate::errors::CoreError;

/// Default page size per search call.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Default pause between ontology searches.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

/// Default language code.
pub const DEFAULT_LANGUAGE: &str = "en";

// ---------------------------------------------------------------------------
// BatchState
// ---------------------------------------------------------------------------

/// Lifecycle of a batch job.
///
/// ```text
/// idle → running → completed
///                → cancelled
/// ```
///
/// There is no failed state: once started, a run always completes (or is
/// cancelled between terms), even if every term fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchState {
    #[default]
    Idle,
    Running,
    Completed,
    Cancelled,
}

impl BatchState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Running],
            Self::Running => &[Self::Completed, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Return the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BatchRow
// ---------------------------------------------------------------------------

/// One output row per input term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRow {
    /// 1-based position in the input list.
    pub index: usize,
    pub term: String,
    pub ontology_prefix: String,
    pub concept_id: String,
    pub label: String,
    pub description: String,
    pub iri: String,
}

impl BatchRow {
    /// Row built from a resolution result.
    #[must_use]
    pub fn from_result(index: usize, term: &str, result: &ResolutionResult) -> Self {
        Self {
            index,
            term: term.to_string(),
            ontology_prefix: result.ontology_prefix.clone(),
            concept_id: result.concept_id.clone(),
            label: result.label.clone(),
            description: result.description.clone(),
            iri: result.iri.clone(),
        }
    }

    /// Row recorded for a term whose resolution failed.
    #[must_use]
    pub fn empty(index: usize, term: &str) -> Self {
        Self {
            index,
            term: term.to_string(),
            ..Self::default()
        }
    }

    /// Whether any resolved field is populated.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.concept_id.is_empty() || !self.iri.is_empty() || !self.label.is_empty()
    }
}

// ---------------------------------------------------------------------------
// BatchJob
// ---------------------------------------------------------------------------

/// The next unit of work handed out by a running job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermTask {
    /// 1-based position.
    pub index: usize,
    pub total: usize,
    pub term: String,
}

/// An ordered list of terms to resolve and the rows accumulated so far.
#[derive(Debug, Clone)]
pub struct BatchJob {
    terms: Vec<String>,
    ontologies: Vec<String>,
    page_size: u32,
    language: String,
    delay: Duration,
    rows: Vec<BatchRow>,
    state: BatchState,
}

impl BatchJob {
    /// Create an idle job with default page size, language, and delay.
    #[must_use]
    pub fn new(terms: Vec<String>, ontologies: Vec<String>) -> Self {
        Self {
            terms,
            ontologies,
            page_size: DEFAULT_PAGE_SIZE,
            language: DEFAULT_LANGUAGE.to_string(),
            delay: DEFAULT_DELAY,
            rows: Vec::new(),
            state: BatchState::Idle,
        }
    }

    /// Page size per search call. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    #[must_use]
    pub fn ontologies(&self) -> &[String] {
        &self.ontologies
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub const fn state(&self) -> BatchState {
        self.state
    }

    #[must_use]
    pub fn rows(&self) -> &[BatchRow] {
        &self.rows
    }

    /// Move the job to `next`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] if the state machine does not
    /// allow the move.
    pub fn transition_to(&mut self, next: BatchState) -> Result<(), CoreError> {
        if !self.state.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "batch".into(),
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }
        self.state = next;
        Ok(())
    }

    /// The next term to resolve, if the job is running and terms remain.
    #[must_use]
    pub fn next_task(&self) -> Option<TermTask> {
        if self.state != BatchState::Running {
            return None;
        }
        let position = self.rows.len();
        self.terms.get(position).map(|term| TermTask {
            index: position + 1,
            total: self.terms.len(),
            term: term.clone(),
        })
    }

    /// Append the row for the task most recently handed out.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the row is out of order or the job
    /// is not running.
    pub fn record(&mut self, row: BatchRow) -> Result<(), CoreError> {
        if self.state != BatchState::Running {
            return Err(CoreError::Validation(format!(
                "cannot record rows while batch is {}",
                self.state
            )));
        }
        let expected = self.rows.len() + 1;
        if row.index != expected {
            return Err(CoreError::Validation(format!(
                "batch row {} recorded out of order (expected {expected})",
                row.index
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Number of terms with a recorded row.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.rows.len()
    }
}
