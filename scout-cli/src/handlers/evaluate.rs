//! Evaluate command handler

use crate::args::EvaluateArgs;
use crate::context::ScoutCliContext;
use crate::handlers::Outcome;
use crate::output::*;
use scout::artifacts::load_submission;
use scout::services::{EvaluationResult, EvaluationService, Submission};

pub async fn handle_evaluate_command(
    args: EvaluateArgs,
    ctx: &ScoutCliContext,
) -> scout::Result<Outcome> {
    let evaluator = ctx.evaluator()?;
    let submission = load_submission(&args.input, &args.config)?;

    if !ctx.output.is_json() {
        if submission.object_ids.is_empty() {
            println!("{}", format_warning("Submitting an empty id list"));
        }
        println!(
            "{}",
            format_submission(evaluator.endpoint(), evaluator.identity(), &submission)
        );
    }

    let result = submit(ctx, &evaluator, &submission).await?;
    report_evaluation(ctx, &result)?;
    Ok(outcome_of(&result))
}

/// Submit with a spinner
pub(crate) async fn submit(
    ctx: &ScoutCliContext,
    evaluator: &dyn EvaluationService,
    submission: &Submission,
) -> scout::Result<EvaluationResult> {
    let spinner = ctx.spinner(format!(
        "Submitting {} ids for {}...",
        submission.object_ids.len(),
        submission.config_path
    ));
    let result = evaluator.submit(submission).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result
}

fn report_evaluation(ctx: &ScoutCliContext, result: &EvaluationResult) -> scout::Result<()> {
    if ctx.output.is_json() {
        print_json(result)
    } else {
        print_evaluation(result);
        Ok(())
    }
}

pub(crate) fn outcome_of(result: &EvaluationResult) -> Outcome {
    if result.is_success() {
        Outcome::Completed
    } else {
        Outcome::Failed
    }
}
