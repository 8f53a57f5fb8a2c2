use std::path::PathBuf;

use clap::{Args, Subcommand};
use onto_core::IdentifierKind;
use onto_core::export::DEFAULT_FILE_NAME;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Resolve one label to its best-matching concept.
    Resolve(ResolveArgs),
    /// Look up individuals by IRI, short form, or OBO id.
    Lookup(LookupArgs),
    /// Resolve a list of labels and write the results as CSV.
    Batch(BatchArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct ResolveArgs {
    /// Label to resolve
    pub term: String,

    /// Ontology prefixes to search, in order (defaults to configuration)
    #[arg(short = 'o', long = "ontologies", value_delimiter = ',')]
    pub ontologies: Vec<String>,

    /// Return the top N candidates instead of one winner
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub candidates: Option<u32>,

    /// Keep only the best candidate per IRI (with --candidates)
    #[arg(long)]
    pub dedupe: bool,

    /// Results per ontology search
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Pause after each ontology search, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    /// Identifier value
    pub value: String,

    /// Identifier kind: iri, short_form, obo_id
    #[arg(long, default_value = "iri")]
    pub by: IdentifierKind,

    /// Page size
    #[arg(long)]
    pub size: Option<u32>,

    /// Page index (0-based)
    #[arg(long)]
    pub page: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct BatchArgs {
    /// File with one label per line (repeatable)
    #[arg(short = 'f', long = "file")]
    pub files: Vec<PathBuf>,

    /// Inline label (repeatable)
    #[arg(short = 't', long = "term")]
    pub terms: Vec<String>,

    /// Ontology prefixes to search, in order (defaults to configuration)
    #[arg(short = 'o', long = "ontologies", value_delimiter = ',')]
    pub ontologies: Vec<String>,

    /// Extra comma-separated prefixes appended to the selection
    #[arg(long)]
    pub custom: Option<String>,

    /// CSV output path
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    pub output: PathBuf,

    /// Pause after each ontology search, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Results per ontology search
    #[arg(long)]
    pub page_size: Option<u32>,
}
