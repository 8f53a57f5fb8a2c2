use anyhow::Context;
use onto_resolve::Resolver;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveArgs;
use crate::commands::shared::ConceptView;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Activity;

#[derive(Debug, Serialize)]
struct ResolveResponse {
    term: String,
    matched: bool,
    #[serde(flatten)]
    concept: ConceptView,
}

#[derive(Debug, Serialize)]
struct CandidatesResponse {
    term: String,
    ontologies: Vec<String>,
    candidates: Vec<ConceptView>,
}

pub async fn run(args: &ResolveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ontologies = ctx.ontologies(&args.ontologies, None);
    let resolver = Resolver::new(
        &ctx.client,
        ctx.resolve_options(args.page_size, args.delay_ms),
    );
    let activity = Activity::start(format!("Resolving '{}'", args.term));

    if let Some(limit) = args.candidates {
        let ranked = resolver
            .resolve_ranked(&args.term, &ontologies, usize::try_from(limit)?, args.dedupe)
            .await;
        drop(activity);
        let ranked = ranked.with_context(|| format!("failed to resolve '{}'", args.term))?;

        if flags.format == crate::cli::OutputFormat::Table {
            let rows: Vec<ConceptView> = ranked.iter().map(ConceptView::from).collect();
            return output(&rows, flags.format);
        }
        return output(
            &CandidatesResponse {
                term: args.term.clone(),
                ontologies,
                candidates: ranked.iter().map(ConceptView::from).collect(),
            },
            flags.format,
        );
    }

    let result = resolver.resolve_best(&args.term, &ontologies).await;
    drop(activity);
    let result = result.with_context(|| format!("failed to resolve '{}'", args.term))?;

    if !result.is_match() {
        tracing::info!(term = %args.term, "no concept found");
    }
    output(
        &ResolveResponse {
            term: args.term.clone(),
            matched: result.is_match(),
            concept: ConceptView::from(&result),
        },
        flags.format,
    )
}
