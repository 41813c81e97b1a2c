//! Command handlers for the Scout CLI

pub mod criteria;
pub mod embed;
pub mod evaluate;
pub mod index;
pub mod rerank;
pub mod retrieve;
pub mod search;

pub use criteria::handle_criteria_command;
pub use embed::handle_embed_command;
pub use evaluate::handle_evaluate_command;
pub use index::handle_index_command;
pub use rerank::handle_rerank_command;
pub use retrieve::handle_retrieve_command;
pub use search::handle_search_command;

use std::process::ExitCode;

/// How a command finished when it did not error out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The command ran but its result is a failure, e.g. a rejected submission
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}
