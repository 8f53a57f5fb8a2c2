mod common;

use std::time::Duration;

use common::{FakeSource, doc};
use onto_core::{BatchJob, BatchRow, BatchState, TermTask, export};
use onto_resolve::{BatchError, BatchObserver, BatchRunner, BatchSummary, CancelFlag};
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Default)]
struct Recorder {
    started: Option<usize>,
    terms: Vec<(usize, usize, String)>,
    rows: Vec<BatchRow>,
    finished: Option<BatchSummary>,
    cancel_after: Option<(usize, CancelFlag)>,
}

impl BatchObserver for Recorder {
    fn on_start(&mut self, total: usize) {
        self.started = Some(total);
    }

    fn on_term(&mut self, task: &TermTask) {
        self.terms.push((task.index, task.total, task.term.clone()));
    }

    fn on_row(&mut self, row: &BatchRow) {
        self.rows.push(row.clone());
        if let Some((after, flag)) = &self.cancel_after {
            if row.index == *after {
                flag.cancel();
            }
        }
    }

    fn on_finish(&mut self, summary: &BatchSummary) {
        self.finished = Some(summary.clone());
    }
}

fn job(terms: &[&str]) -> BatchJob {
    BatchJob::new(
        terms.iter().map(|t| (*t).to_string()).collect(),
        vec!["cl".into()],
    )
    .with_delay(Duration::ZERO)
}

fn source() -> FakeSource {
    FakeSource::new()
        .with_search(
            "T cell",
            "cl",
            vec![doc(json!({
                "iri": "http://purl.obolibrary.org/obo/CL_0000084",
                "label": "T cell",
                "ontology_prefix": "cl",
                "obo_id": "CL:0000084",
                "description": "A lymphocyte."
            }))],
        )
        .with_search(
            "neuron",
            "cl",
            vec![doc(json!({
                "iri": "http://purl.obolibrary.org/obo/CL_0000540",
                "label": "neuron",
                "ontology_prefix": "cl",
                "obo_id": "CL:0000540",
                "description": "An electrically active cell."
            }))],
        )
        .failing_search("broken")
}

#[tokio::test]
async fn failed_term_yields_empty_row_and_batch_continues() {
    let source = source();
    let mut job = job(&["T cell", "broken", "neuron"]);
    let mut recorder = Recorder::default();

    let summary = BatchRunner::new(&source)
        .run(&mut job, &mut recorder)
        .await
        .unwrap();

    assert_eq!(summary.state, BatchState::Completed);
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.resolved, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.message(), "Completed 3 terms.");
    assert_eq!(job.state(), BatchState::Completed);

    let rows = job.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].concept_id, "CL:0000084");
    assert_eq!(rows[1], BatchRow::empty(2, "broken"));
    assert_eq!(rows[2].concept_id, "CL:0000540");

    assert_eq!(recorder.started, Some(3));
    assert_eq!(
        recorder.terms,
        vec![
            (1, 3, "T cell".to_string()),
            (2, 3, "broken".to_string()),
            (3, 3, "neuron".to_string()),
        ]
    );
    assert_eq!(recorder.rows, rows);
    assert_eq!(recorder.finished, Some(summary));

    let csv = export::to_csv_string(rows).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "term,ontology,ontology_id,label,description,iri");
    assert_eq!(lines[2], "broken,,,,,");
}

#[tokio::test]
async fn unresolved_term_is_still_recorded() {
    let source = source();
    let mut job = job(&["unknown thing"]);

    let summary = BatchRunner::new(&source).run(&mut job, &mut ()).await.unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.resolved, 0);
    assert_eq!(summary.failed, 0);
    assert_eq!(job.rows(), [BatchRow::empty(1, "unknown thing")]);
}

#[tokio::test]
async fn empty_terms_leave_job_idle() {
    let source = source();
    let mut job = BatchJob::new(Vec::new(), vec!["cl".into()]);

    let err = BatchRunner::new(&source)
        .run(&mut job, &mut ())
        .await
        .unwrap_err();

    assert!(matches!(err, BatchError::EmptyTerms));
    assert_eq!(err.to_string(), "Add at least one term (inline or from a file).");
    assert_eq!(job.state(), BatchState::Idle);
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn missing_ontologies_leave_job_idle() {
    let source = source();
    let mut job = BatchJob::new(vec!["T cell".into()], Vec::new());

    let err = BatchRunner::new(&source)
        .run(&mut job, &mut ())
        .await
        .unwrap_err();

    assert!(matches!(err, BatchError::NoOntologies));
    assert_eq!(err.to_string(), "Select or add at least one ontology prefix.");
    assert_eq!(job.state(), BatchState::Idle);
}

#[tokio::test]
async fn finished_job_cannot_run_again() {
    let source = source();
    let mut job = job(&["T cell"]);
    let runner = BatchRunner::new(&source);
    runner.run(&mut job, &mut ()).await.unwrap();

    let err = runner.run(&mut job, &mut ()).await.unwrap_err();

    assert!(matches!(err, BatchError::State(_)));
    assert_eq!(job.processed(), 1);
}

#[tokio::test]
async fn cancellation_stops_between_terms() {
    let source = source();
    let mut job = job(&["T cell", "neuron", "broken"]);
    let cancel = CancelFlag::new();
    let mut recorder = Recorder {
        cancel_after: Some((1, cancel.clone())),
        ..Recorder::default()
    };

    let summary = BatchRunner::new(&source)
        .with_cancel(cancel)
        .run(&mut job, &mut recorder)
        .await
        .unwrap();

    assert_eq!(summary.state, BatchState::Cancelled);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.message(), "Cancelled after 1 of 3 terms.");
    assert_eq!(job.state(), BatchState::Cancelled);
    assert_eq!(job.rows().len(), 1);
    assert_eq!(recorder.terms.len(), 1);
    assert_eq!(source.searched_prefixes(), vec!["cl"]);
}

#[tokio::test]
async fn cancel_before_start_records_nothing() {
    let source = source();
    let mut job = job(&["T cell"]);
    let runner = BatchRunner::new(&source);
    runner.cancel_flag().cancel();

    let summary = runner.run(&mut job, &mut ()).await.unwrap();

    assert_eq!(summary.state, BatchState::Cancelled);
    assert_eq!(summary.processed, 0);
    assert!(source.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn job_delay_paces_every_search() {
    let source = source();
    let mut job = BatchJob::new(
        vec!["T cell".into(), "neuron".into()],
        vec!["cl".into(), "go".into()],
    )
    .with_delay(Duration::from_millis(50));

    let start = tokio::time::Instant::now();
    BatchRunner::new(&source).run(&mut job, &mut ()).await.unwrap();

    // Two terms times two prefixes.
    assert_eq!(start.elapsed(), Duration::from_millis(200));
}
