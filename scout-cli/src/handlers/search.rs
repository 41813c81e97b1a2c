//! Search command handler: retrieve, rerank and optionally submit

use crate::args::SearchArgs;
use crate::context::ScoutCliContext;
use crate::handlers::Outcome;
use crate::handlers::evaluate::{outcome_of, submit};
use crate::handlers::retrieve::retrieve_to_file;
use crate::output::*;
use scout::services::Submission;
use serde_json::json;

pub async fn handle_search_command(
    args: SearchArgs,
    ctx: &ScoutCliContext,
) -> scout::Result<Outcome> {
    // Build every client up front so a missing credential fails before any request
    let embedder = ctx.embedder()?;
    let index = ctx.index()?;
    let evaluator = if args.submit {
        Some(ctx.evaluator()?)
    } else {
        None
    };

    let top_k = ctx.top_k(args.top_k);
    let retrieved = retrieve_to_file(
        ctx,
        &embedder,
        &index,
        &args.query,
        top_k,
        &args.candidates_out,
    )
    .await?;

    let output = ctx.ranker().rerank_file(
        &args.candidates_out,
        &args.query,
        &args.config,
        &ctx.catalog(),
        &args.out,
    )?;

    let evaluation = match &evaluator {
        Some(evaluator) => Some(submit(ctx, evaluator, &Submission::from(output.clone())).await?),
        None => None,
    };

    if ctx.output.is_json() {
        let mut response = json!({
            "query": args.query,
            "retrieved": retrieved,
            "candidates_path": args.candidates_out.display().to_string(),
            "path": args.out.display().to_string(),
            "ranking": output,
        });
        if let Some(result) = &evaluation {
            response["evaluation"] = serde_json::to_value(result)?;
        }
        print_json(&response)?;
    } else {
        println!(
            "{}",
            format_success(&format!(
                "Retrieved {} candidates into {}",
                retrieved,
                args.candidates_out.display()
            ))
        );
        println!(
            "{}",
            format_success(&format!("Wrote ranking to {}", args.out.display()))
        );
        print_ranking(&output);
        if let Some(result) = &evaluation {
            println!();
            print_evaluation(result);
        }
    }

    Ok(evaluation.as_ref().map_or(Outcome::Completed, outcome_of))
}
