pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;
pub mod utils;

pub use args::OutputFormat;
pub use commands::{Cli, Commands};
pub use context::ScoutCliContext;
pub use handlers::Outcome;
pub use output::{
    CliColors, describe_criteria, format_error, format_info, format_success, format_warning,
    output_error, print_criteria, print_evaluation, print_explain, print_json, print_ranking,
};
pub use utils::{display_id, truncate_chars};

use clap::CommandFactory;
use handlers::*;
use scout::config::LogLevel;
use scout::logging::level_to_log_level;
use tracing::Level;

/// Output format: `--output`, then `SCOUT_OUTPUT`, then text
pub fn resolve_output_format(flag: Option<OutputFormat>, env_value: Option<&str>) -> OutputFormat {
    flag.or_else(|| env_value.and_then(OutputFormat::from_env_value))
        .unwrap_or(OutputFormat::Text)
}

/// Log level implied by `-q`/`-v`, if either was given
pub fn log_level_override(verbose: u8, quiet: bool) -> Option<LogLevel> {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => return None,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    Some(level_to_log_level(level))
}

/// Run a command that needs no configuration
pub fn run_standalone(command: &Commands) -> Outcome {
    match command {
        Commands::Version => println!("Scout CLI v{}", scout::VERSION),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "scout", &mut std::io::stdout());
        }
        _ => {}
    }
    Outcome::Completed
}

/// Dispatch a command to its handler
pub async fn run(command: Commands, ctx: &ScoutCliContext) -> scout::Result<Outcome> {
    match command {
        Commands::Retrieve(args) => handle_retrieve_command(args, ctx).await,
        Commands::Rerank(args) => handle_rerank_command(args, ctx),
        Commands::Evaluate(args) => handle_evaluate_command(args, ctx).await,
        Commands::Search(args) => handle_search_command(args, ctx).await,
        Commands::Embed(args) => handle_embed_command(args, ctx).await,
        Commands::Index => handle_index_command(ctx),
        Commands::Criteria(args) => handle_criteria_command(args, ctx),
        Commands::Version | Commands::Completions(_) => Ok(run_standalone(&command)),
    }
}
