//! Drives a [`BatchJob`] through the resolver, one term at a time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use onto_client::OntologySource;
use onto_core::{BatchJob, BatchRow, BatchState, CoreError, TermTask};

use crate::resolver::{ResolveOptions, Resolver};

/// Why a batch could not run.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Add at least one term (inline or from a file).")]
    EmptyTerms,

    #[error("Select or add at least one ontology prefix.")]
    NoOntologies,

    #[error(transparent)]
    State(#[from] CoreError),
}

/// Progress callbacks for a running batch.
///
/// Every method has a no-op default; `()` ignores everything.
pub trait BatchObserver {
    fn on_start(&mut self, _total: usize) {}

    /// Called before the term is resolved.
    fn on_term(&mut self, _task: &TermTask) {}

    fn on_row(&mut self, _row: &BatchRow) {}

    fn on_finish(&mut self, _summary: &BatchSummary) {}
}

impl BatchObserver for () {}

/// Shared cancellation signal, checked between terms.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Final tally of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub state: BatchState,
    pub total: usize,
    pub processed: usize,
    pub resolved: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Completion percentage, rounded down.
    #[must_use]
    pub const fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        self.processed * 100 / self.total
    }

    /// Human-readable status line.
    #[must_use]
    pub fn message(&self) -> String {
        match self.state {
            BatchState::Cancelled => format!(
                "Cancelled after {} of {} terms.",
                self.processed, self.total
            ),
            _ => format!("Completed {} terms.", self.processed),
        }
    }
}

/// Runs batch jobs against one ontology source.
pub struct BatchRunner<'a, S> {
    source: &'a S,
    cancel: CancelFlag,
}

impl<'a, S: OntologySource> BatchRunner<'a, S> {
    #[must_use]
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            cancel: CancelFlag::new(),
        }
    }

    /// Use `cancel` instead of a private flag.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub const fn cancel_flag(&self) -> &CancelFlag {
        &self.cancel
    }

    /// Resolve every term of `job` in order, recording exactly one row per
    /// processed term.
    ///
    /// A term whose resolution fails gets an empty row and the batch moves
    /// on. Cancellation is honored between terms and leaves the job in
    /// [`BatchState::Cancelled`] with the rows recorded so far.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::EmptyTerms`] or [`BatchError::NoOntologies`]
    /// before any work starts (the job stays idle), or
    /// [`BatchError::State`] if the job is not idle.
    pub async fn run(
        &self,
        job: &mut BatchJob,
        observer: &mut impl BatchObserver,
    ) -> Result<BatchSummary, BatchError> {
        if job.terms().is_empty() {
            return Err(BatchError::EmptyTerms);
        }
        if job.ontologies().is_empty() {
            return Err(BatchError::NoOntologies);
        }
        job.transition_to(BatchState::Running)?;

        let total = job.terms().len();
        let ontologies = job.ontologies().to_vec();
        let resolver = Resolver::new(
            self.source,
            ResolveOptions {
                page_size: job.page_size(),
                language: job.language().to_string(),
                delay: job.delay(),
            },
        );
        tracing::debug!(total, ontologies = ?ontologies, "batch started");
        observer.on_start(total);

        let mut failed = 0;
        while let Some(task) = job.next_task() {
            if self.cancel.is_cancelled() {
                break;
            }
            observer.on_term(&task);

            let row = match resolver.resolve_best(&task.term, &ontologies).await {
                Ok(result) => BatchRow::from_result(task.index, &task.term, &result),
                Err(error) => {
                    tracing::warn!(index = task.index, term = %task.term, %error, "term resolution failed");
                    failed += 1;
                    BatchRow::empty(task.index, &task.term)
                }
            };
            observer.on_row(&row);
            job.record(row)?;
        }

        let end = if self.cancel.is_cancelled() && job.processed() < total {
            BatchState::Cancelled
        } else {
            BatchState::Completed
        };
        job.transition_to(end)?;

        let summary = BatchSummary {
            state: end,
            total,
            processed: job.processed(),
            resolved: job.rows().iter().filter(|row| row.is_resolved()).count(),
            failed,
        };
        tracing::debug!(
            state = %summary.state,
            processed = summary.processed,
            failed = summary.failed,
            "batch finished"
        );
        observer.on_finish(&summary);
        Ok(summary)
    }
}
