use std::path::{Path, PathBuf};

use anyhow::Context;
use onto_core::{BatchJob, BatchRow, BatchState, TermTask, export, terms};
use onto_resolve::{BatchObserver, BatchRunner, BatchSummary, CancelFlag};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BatchArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::TermProgress;

#[derive(Debug, Serialize)]
struct BatchResponse {
    state: BatchState,
    message: String,
    total: usize,
    processed: usize,
    resolved: usize,
    failed: usize,
    output: PathBuf,
}

/// Drives the progress bar from runner callbacks.
#[derive(Default)]
struct ProgressObserver {
    progress: Option<TermProgress>,
}

impl BatchObserver for ProgressObserver {
    fn on_start(&mut self, total: usize) {
        self.progress = Some(TermProgress::new(total));
    }

    fn on_term(&mut self, task: &TermTask) {
        if let Some(progress) = &self.progress {
            progress.term(task);
        }
    }

    fn on_row(&mut self, _row: &BatchRow) {
        if let Some(progress) = &self.progress {
            progress.advance();
        }
    }

    fn on_finish(&mut self, summary: &BatchSummary) {
        if let Some(progress) = &self.progress {
            progress.finish(summary);
        }
    }
}

/// Read every term file and append inline terms, in argument order.
fn collect_terms(files: &[PathBuf], inline: &[String]) -> anyhow::Result<Vec<String>> {
    let mut sources = Vec::with_capacity(files.len() + inline.len());
    for path in files {
        sources.push(read_terms_file(path)?);
    }
    sources.extend(inline.iter().cloned());
    Ok(terms::merge_terms(sources))
}

fn read_terms_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read term file {}", path.display()))
}

/// Turn each interrupt into a cancellation request.
///
/// Repeat interrupts are logged rather than dropped; the run still finishes
/// the current term and writes the partial CSV.
async fn forward_interrupts<F, Fut>(mut next_interrupt: F, cancel: CancelFlag)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    while next_interrupt().await.is_ok() {
        if cancel.is_cancelled() {
            tracing::warn!("interrupt received again; still writing the partial CSV");
        } else {
            tracing::warn!("interrupt received; stopping after the current term");
            cancel.cancel();
        }
    }
}

pub async fn run(args: &BatchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let terms = collect_terms(&args.files, &args.terms)?;
    let ontologies = ctx.ontologies(&args.ontologies, args.custom.as_deref());
    let options = ctx.resolve_options(args.page_size, args.delay_ms);

    let mut job = BatchJob::new(terms, ontologies)
        .with_page_size(options.page_size)
        .with_language(options.language)
        .with_delay(options.delay);

    let cancel = CancelFlag::new();
    // Held until the CSV is written: the handler owns SIGINT from here on.
    let interrupt = tokio::spawn(forward_interrupts(tokio::signal::ctrl_c, cancel.clone()));

    let runner = BatchRunner::new(&ctx.client).with_cancel(cancel);
    let mut observer = ProgressObserver::default();
    let finished: anyhow::Result<BatchSummary> = async {
        let summary = runner.run(&mut job, &mut observer).await?;
        export::write_csv_file(&args.output, job.rows())
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        Ok(summary)
    }
    .await;
    interrupt.abort();
    let summary = finished?;

    output(
        &BatchResponse {
            state: summary.state,
            message: summary.message(),
            total: summary.total,
            processed: summary.processed,
            resolved: summary.resolved,
            failed: summary.failed,
            output: args.output.clone(),
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn files_come_before_inline_terms() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "T cell\r\n\r\n  B cell  \n").unwrap();

        let terms = collect_terms(&[file.path().to_path_buf()], &["neuron".to_string()]).unwrap();

        assert_eq!(terms, vec!["T cell", "B cell", "neuron"]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = collect_terms(&[PathBuf::from("/nonexistent/terms.txt")], &[]).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/terms.txt"));
    }

    #[test]
    fn inline_terms_are_split_and_trimmed() {
        let terms = collect_terms(&[], &[" a \n\nb".to_string(), "   ".to_string()]).unwrap();
        assert_eq!(terms, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn interrupts_cancel_once_and_keep_listening() {
        let cancel = CancelFlag::new();
        let mut remaining = 3;
        let mut seen = 0;

        forward_interrupts(
            || {
                seen += 1;
                let result = if remaining > 0 {
                    remaining -= 1;
                    Ok(())
                } else {
                    Err(std::io::Error::other("listener closed"))
                };
                std::future::ready(result)
            },
            cancel.clone(),
        )
        .await;

        assert!(cancel.is_cancelled());
        // Three interrupts plus the closing error.
        assert_eq!(seen, 4);
    }

    #[tokio::test]
    async fn closed_listener_never_cancels() {
        let cancel = CancelFlag::new();
        forward_interrupts(
            || std::future::ready(Err(std::io::Error::other("unsupported"))),
            cancel.clone(),
        )
        .await;
        assert!(!cancel.is_cancelled());
    }
}
