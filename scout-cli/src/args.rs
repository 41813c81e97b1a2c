//! Command argument structures
//!
//! This module contains the argument structs for each subcommand.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable text
    Text,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }

    /// Parse the value of the `SCOUT_OUTPUT` environment variable
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "text" | "table" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct RetrieveArgs {
    /// Free-text query to embed
    #[arg(long)]
    pub query: String,

    /// Number of nearest candidates to fetch (defaults to `ranking.default_top_k`)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// File receiving the candidate array
    #[arg(long, default_value = "candidates.json")]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct RerankArgs {
    /// Candidate array produced by `retrieve`
    #[arg(long = "in", value_name = "FILE", default_value = "candidates.json")]
    pub input: PathBuf,

    /// Query used for keyword scoring
    #[arg(long)]
    pub query: String,

    /// Criteria profile name, also written as `config_path`
    #[arg(long, short)]
    pub config: String,

    /// File receiving `{config_path, object_ids}`
    #[arg(long, default_value = "top10.json")]
    pub out: PathBuf,

    /// Print the per-candidate score breakdown
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Criteria profile name; used unless the input file carries its own
    #[arg(long, short)]
    pub config: String,

    /// Ranking output, or a bare JSON array of ids
    #[arg(long = "in", value_name = "FILE", default_value = "top10.json")]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query
    #[arg(long)]
    pub query: String,

    /// Criteria profile name
    #[arg(long, short)]
    pub config: String,

    /// Number of nearest candidates to fetch (defaults to `ranking.default_top_k`)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// File receiving the retrieved candidates
    #[arg(long, default_value = "candidates.json")]
    pub candidates_out: PathBuf,

    /// File receiving the ranking output
    #[arg(long, default_value = "top10.json")]
    pub out: PathBuf,

    /// Submit the ranking to the evaluation endpoint
    #[arg(long)]
    pub submit: bool,
}

#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Texts to embed
    #[arg(required = true)]
    pub texts: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CriteriaArgs {
    /// Profile to show; lists every profile when omitted
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
