//! Criteria command handler

use crate::args::CriteriaArgs;
use crate::context::ScoutCliContext;
use crate::handlers::Outcome;
use crate::output::*;
use scout::criteria::CriteriaResolver;
use serde_json::json;

pub fn handle_criteria_command(
    args: CriteriaArgs,
    ctx: &ScoutCliContext,
) -> scout::Result<Outcome> {
    let catalog = ctx.catalog();

    let Some(name) = args.name else {
        if ctx.output.is_json() {
            print_json(&ctx.config.criteria)?;
        } else if catalog.is_empty() {
            println!("{}", format_info("No criteria profiles configured."));
        } else {
            println!(
                "{}",
                format_info(&format!("{} criteria profiles:", catalog.len()))
            );
            for (name, criteria) in catalog.iter() {
                print_criteria(name, criteria);
            }
        }
        return Ok(Outcome::Completed);
    };

    let known = catalog.get(&name).is_some();
    let criteria = catalog.resolve(&name);

    if ctx.output.is_json() {
        print_json(&json!({
            "name": name,
            "known": known,
            "criteria": criteria,
        }))?;
    } else {
        if !known {
            println!(
                "{}",
                format_warning(&format!(
                    "Unknown profile '{}'; rankings will apply no hard criteria",
                    name
                ))
            );
        }
        print_criteria(&name, &criteria);
    }

    Ok(Outcome::Completed)
}
