//! # Scout
//!
//! Candidate search pipeline: embed a free-text query, retrieve the nearest
//! candidate records from a vector index, rerank them against rule-based hard
//! and soft criteria, and submit the ranked id list to an evaluation endpoint.
//!
//! ## Quick Start
//!
//! ```rust
//! use scout::prelude::*;
//!
//! let candidates: Vec<Candidate> = serde_json::from_str(r#"[
//!     {"_id": "a", "degree": ["JD"], "country": "United States",
//!      "experience": ["start_2010::end_2020"], "name": "tax lawyer"}
//! ]"#).unwrap();
//!
//! let criteria = HardCriteria::new().with_degree("jd").with_min_years(3);
//! let ranked = Ranker::default().rank(&candidates, "tax lawyer", &criteria);
//! assert_eq!(ranked.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! - **Core** (synchronous): [`records`] decodes the `key_value::key_value`
//!   micro-format, [`criteria`] gates candidates, [`scoring`] computes the soft
//!   score and [`ranking`] sorts and truncates.
//! - **Glue** (async): [`services`] wraps the embedding API, the vector index
//!   and the evaluation endpoint behind narrow traits.
//! - **Ambient**: [`config`] (figment layers), [`logging`] (tracing) and
//!   [`artifacts`] (JSON files exchanged between pipeline stages).

pub mod artifacts;
pub mod candidate;
pub mod config;
pub mod criteria;
pub mod logging;
pub mod ranking;
pub mod records;
pub mod scoring;
pub mod services;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::candidate::{Candidate, CandidateId};
    pub use crate::config::{ConfigBuilder, ConfigLoader, ScoutConfig};
    pub use crate::criteria::{CriteriaCatalog, CriteriaResolver, GateVerdict, HardCriteria};
    pub use crate::ranking::{RankedList, Ranker, RankingOutput};
    pub use crate::records::{RecordFields, parse_record, total_experience_years};
    pub use crate::scoring::{ScoreBreakdown, Scorer};
    pub use crate::services::{EmbeddingProvider, EvaluationService, VectorIndex};

    pub use crate::{Result, ScoutError};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Scout operations with recovery hints
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A collaborator was constructed without its credential
    #[error("{name} is not configured. Set the {env} environment variable or add it to scout.toml")]
    MissingCredential {
        name: &'static str,
        env: &'static str,
    },

    /// Reading or writing an artifact failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not in the expected shape
    #[error("Malformed input in {path}: {reason}")]
    MalformedInput { path: String, reason: String },

    /// An external service answered with a non-success status
    #[error("{service} returned HTTP {status}: {body}")]
    Service {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}. Check your network connection and the configured endpoint")]
    Http(#[from] reqwest::Error),

    /// JSON encoding failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Logging setup failure
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl ScoutError {
    /// Stable machine-readable code for structured output
    pub fn code(&self) -> &'static str {
        match self {
            ScoutError::Configuration(_) => "CONFIGURATION_ERROR",
            ScoutError::MissingCredential { .. } => "MISSING_CREDENTIAL",
            ScoutError::Io { .. } => "IO_ERROR",
            ScoutError::MalformedInput { .. } => "MALFORMED_INPUT",
            ScoutError::Service { .. } => "SERVICE_ERROR",
            ScoutError::Http(_) => "HTTP_ERROR",
            ScoutError::Serialization(_) => "SERIALIZATION_ERROR",
            ScoutError::Logging(_) => "LOGGING_ERROR",
            ScoutError::Other(_) => "ERROR",
        }
    }
}

impl From<crate::config::ConfigError> for ScoutError {
    fn from(err: crate::config::ConfigError) -> Self {
        ScoutError::Configuration(err.to_string())
    }
}

/// Result type for Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;
