//! Index command handler

use crate::context::ScoutCliContext;
use crate::handlers::Outcome;
use crate::output::*;
use serde_json::json;

/// Check that the vector index client can be built from the configuration
pub fn handle_index_command(ctx: &ScoutCliContext) -> scout::Result<Outcome> {
    let index = ctx.index()?;

    if ctx.output.is_json() {
        print_json(&json!({
            "namespace": index.namespace(),
            "endpoint": index.query_url(),
        }))?;
    } else {
        println!(
            "{}",
            format_success(&format!("Vector index namespace: {}", index.namespace()))
        );
        println!("{}", format_info(&format!("Query endpoint: {}", index.query_url())));
    }

    Ok(Outcome::Completed)
}
