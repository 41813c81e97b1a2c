//! Retrieve command handler

use crate::args::RetrieveArgs;
use crate::context::ScoutCliContext;
use crate::handlers::Outcome;
use crate::output::*;
use scout::artifacts::write_json;
use scout::services::{EmbeddingProvider, VectorIndex, retrieve};
use serde_json::json;
use std::path::Path;

pub async fn handle_retrieve_command(
    args: RetrieveArgs,
    ctx: &ScoutCliContext,
) -> scout::Result<Outcome> {
    let embedder = ctx.embedder()?;
    let index = ctx.index()?;
    let top_k = ctx.top_k(args.top_k);

    let count = retrieve_to_file(ctx, &embedder, &index, &args.query, top_k, &args.out).await?;

    if ctx.output.is_json() {
        print_json(&json!({
            "query": args.query,
            "top_k": top_k,
            "retrieved": count,
            "path": args.out.display().to_string(),
        }))?;
    } else {
        println!(
            "{}",
            format_success(&format!(
                "Retrieved {} candidates into {}",
                count,
                args.out.display()
            ))
        );
    }

    Ok(Outcome::Completed)
}

/// Retrieve the nearest candidates and write them to `out`, returning the count
pub(crate) async fn retrieve_to_file(
    ctx: &ScoutCliContext,
    embedder: &dyn EmbeddingProvider,
    index: &dyn VectorIndex,
    query: &str,
    top_k: usize,
    out: &Path,
) -> scout::Result<usize> {
    let spinner = ctx.spinner(format!(
        "Retrieving {} candidates from {}...",
        top_k,
        index.describe()
    ));
    let result = retrieve(embedder, index, query, top_k).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let candidates = result?;
    if candidates.is_empty() && !ctx.output.is_json() {
        println!("{}", format_warning("The vector index returned no candidates"));
    }

    write_json(out, &candidates)?;
    Ok(candidates.len())
}
