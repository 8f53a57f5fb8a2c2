use anyhow::Context;
use onto_client::{IndividualQuery, PageInfo};
use onto_core::{IdentifierKind, SearchParameters};
use onto_resolve::Resolver;
use serde::Serialize;

use crate::cli::root_commands::LookupArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::ConceptView;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Activity;

#[derive(Debug, Serialize)]
struct LookupResponse {
    by: IdentifierKind,
    value: String,
    page: PageInfo,
    concepts: Vec<ConceptView>,
}

fn build_query(args: &LookupArgs, language: &str) -> anyhow::Result<IndividualQuery> {
    let mut params = SearchParameters::for_identifier(args.by, args.value.clone(), language);
    params.page_size = args.size;
    params.page_index = args.page;
    IndividualQuery::from_params(&params).map_err(anyhow::Error::from)
}

pub async fn run(args: &LookupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args, &ctx.config.resolve.language)?;
    let resolver = Resolver::new(&ctx.client, ctx.resolve_options(None, None));

    let activity = Activity::start(format!("Looking up {} '{}'", args.by, args.value));
    let result = resolver.lookup(&query).await;
    drop(activity);
    let result = result.with_context(|| format!("failed to look up {} '{}'", args.by, args.value))?;

    let concepts: Vec<ConceptView> = result.concepts.into_iter().map(ConceptView::from).collect();
    if flags.format == OutputFormat::Table {
        return output(&concepts, flags.format);
    }
    output(
        &LookupResponse {
            by: args.by,
            value: args.value.trim().to_string(),
            page: result.page,
            concepts,
        },
        flags.format,
    )
}
