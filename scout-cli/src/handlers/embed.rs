//! Embed command handler

use crate::args::EmbedArgs;
use crate::context::ScoutCliContext;
use crate::handlers::Outcome;
use crate::output::*;
use scout::services::EmbeddingProvider;
use serde_json::json;

pub async fn handle_embed_command(
    args: EmbedArgs,
    ctx: &ScoutCliContext,
) -> scout::Result<Outcome> {
    let embedder = ctx.embedder()?;

    let spinner = ctx.spinner(format!("Embedding {} texts...", args.texts.len()));
    let result = embedder.embed(&args.texts).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let vectors = result?;

    let dimensions = vectors.first().map_or(0, Vec::len);
    if ctx.output.is_json() {
        print_json(&json!({
            "model": embedder.model(),
            "count": vectors.len(),
            "dimensions": dimensions,
        }))?;
    } else {
        println!(
            "{}",
            format_success(&format!(
                "Embedded {} texts with {} ({} dimensions)",
                vectors.len(),
                embedder.model(),
                dimensions
            ))
        );
    }

    Ok(Outcome::Completed)
}
