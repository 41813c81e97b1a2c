use clap::Parser;
use scout_cli::{Cli, ScoutCliContext, log_level_override, output_error, resolve_output_format};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_output = std::env::var("SCOUT_OUTPUT").ok();
    let output_format = resolve_output_format(cli.output, env_output.as_deref());

    if cli.command.is_standalone() {
        return scout_cli::run_standalone(&cli.command).into();
    }

    let mut ctx = match ScoutCliContext::load(cli.config_file.as_deref(), output_format) {
        Ok(ctx) => ctx,
        Err(e) => {
            output_error(&e, output_format);
            return ExitCode::FAILURE;
        }
    };

    if let Some(level) = log_level_override(cli.verbose, cli.quiet) {
        ctx.config.logging.level = level;
    }

    // Held until exit so buffered file logs are flushed
    let _log_guard = match scout::logging::init(&ctx.config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            output_error(&e.into(), output_format);
            return ExitCode::FAILURE;
        }
    };
    debug!(command = ?cli.command, "Running command");

    match scout_cli::run(cli.command, &ctx).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            output_error(&e, output_format);
            ExitCode::FAILURE
        }
    }
}
