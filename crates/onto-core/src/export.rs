//! CSV export of batch rows.
//!
//! Fixed columns `term,ontology,ontology_id,label,description,iri`. Fields
//! containing a comma, double quote, or newline are quoted with doubled
//! internal quotes; everything else is written bare.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::batch::BatchRow;
use crate::errors::CoreError;

/// Export header, in column order.
pub const CSV_HEADER: [&str; 6] = ["term", "ontology", "ontology_id", "label", "description", "iri"];

/// Default file name offered for downloads.
pub const DEFAULT_FILE_NAME: &str = "ontology_results.csv";

/// Write `rows` as CSV to `writer`.
///
/// # Errors
///
/// Returns [`CoreError::Csv`] if serialization or the underlying write fails.
pub fn write_csv<W: Write>(rows: &[BatchRow], writer: W) -> Result<(), CoreError> {
    let mut out = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    out.write_record(CSV_HEADER)?;
    for row in rows {
        out.write_record([
            row.term.as_str(),
            row.ontology_prefix.as_str(),
            row.concept_id.as_str(),
            row.label.as_str(),
            row.description.as_str(),
            row.iri.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Render `rows` as a CSV string.
///
/// # Errors
///
/// Returns [`CoreError`] if serialization fails.
pub fn to_csv_string(rows: &[BatchRow]) -> Result<String, CoreError> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| CoreError::Validation(format!("CSV output is not UTF-8: {e}")))
}

/// Write `rows` to a CSV file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the file cannot be created, or
/// [`CoreError::Csv`] if writing fails.
pub fn write_csv_file(path: &Path, rows: &[BatchRow]) -> Result<(), CoreError> {
    let file = File::create(path)?;
    write_csv(rows, file)
}
