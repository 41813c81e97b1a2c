//! Command definitions
//!
//! The top-level parser and the subcommand enum.

use crate::args::*;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(about = "Retrieve, rerank and evaluate candidates for a role", long_about = None)]
#[command(version = scout::VERSION)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON); defaults to ./scout.toml and friends
    #[arg(long, global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format; falls back to SCOUT_OUTPUT, then text
    #[arg(long, short, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// More logging (-v debug, -vv trace)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Embed a query and fetch the nearest candidates from the vector index
    Retrieve(RetrieveArgs),

    /// Rank a candidate file against a criteria profile
    #[command(
        long_about = r#"
Rank a candidate file against a criteria profile and write the top ids.

SCORING:
  • +100 when the candidate passes every hard criterion (degree, years, country)
  • +1 per query term longer than 3 characters found in the summary or name
  • +0.5 per year of experience, capped at +10

Ties keep their input order. Use --explain to see each component."#
    )]
    Rerank(RerankArgs),

    /// Submit a ranking to the evaluation endpoint
    Evaluate(EvaluateArgs),

    /// Retrieve, rerank and optionally submit in one run
    Search(SearchArgs),

    /// Embed texts and report the vector dimensions
    Embed(EmbedArgs),

    /// Check the vector index configuration
    Index,

    /// List criteria profiles or show one
    Criteria(CriteriaArgs),

    /// Display version information
    Version,

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

impl Commands {
    /// Whether the command can run without loading configuration
    pub fn is_standalone(&self) -> bool {
        matches!(self, Commands::Version | Commands::Completions(_))
    }
}
