//! Rerank command handler

use crate::args::RerankArgs;
use crate::context::ScoutCliContext;
use crate::handlers::Outcome;
use crate::output::*;
use scout::artifacts::{load_candidates, write_json};
use scout::criteria::CriteriaResolver;
use serde_json::{Value, json};

pub fn handle_rerank_command(args: RerankArgs, ctx: &ScoutCliContext) -> scout::Result<Outcome> {
    let candidates = load_candidates(&args.input)?;
    let criteria = ctx.catalog().resolve(&args.config);
    let ranked = ctx.ranker().rank(&candidates, &args.query, &criteria);

    let explain: Option<Vec<Value>> = args.explain.then(|| {
        ranked
            .entries()
            .iter()
            .map(|entry| json!({ "id": entry.id(), "breakdown": entry.breakdown }))
            .collect()
    });
    if args.explain && !ctx.output.is_json() {
        print_explain(&ranked);
        println!();
    }

    let output = ranked.into_output(args.config.as_str());
    write_json(&args.out, &output)?;

    if ctx.output.is_json() {
        let mut response = json!({
            "path": args.out.display().to_string(),
            "scored": candidates.len(),
            "ranking": output,
        });
        if let Some(explain) = explain {
            response["explain"] = Value::Array(explain);
        }
        print_json(&response)?;
    } else {
        println!(
            "{}",
            format_success(&format!(
                "Ranked {} candidates into {}",
                candidates.len(),
                args.out.display()
            ))
        );
        print_ranking(&output);
    }

    Ok(Outcome::Completed)
}
