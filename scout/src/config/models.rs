//! Configuration model definitions.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::criteria::{HardCriteria, builtin_profiles};
use crate::ranking::DEFAULT_TOP_N;

/// Main configuration structure for Scout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    /// Embedding provider configuration
    pub embedding: EmbeddingConfig,

    /// Vector index configuration
    pub index: IndexConfig,

    /// Evaluation endpoint configuration
    pub evaluation: EvaluationConfig,

    /// Settings shared by all HTTP clients
    pub http: HttpConfig,

    /// Ranking configuration
    pub ranking: RankingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Hard-criteria profiles keyed by config name; file entries extend and
    /// override the built-in profiles
    pub criteria: BTreeMap<String, HardCriteria>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            embedding: EmbeddingConfig::default(),
            index: IndexConfig::default(),
            evaluation: EvaluationConfig::default(),
            http: HttpConfig::default(),
            ranking: RankingConfig::default(),
            logging: LoggingConfig::default(),
            criteria: builtin_profiles(),
        }
    }
}

/// Embedding provider (Voyage AI) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// API key; required only when embeddings are requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name
    pub model: String,

    /// Optional input type hint (`query` or `document`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    /// API base URL
    pub base_url: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "voyage-3".to_string(),
            input_type: None,
            base_url: "https://api.voyageai.com".to_string(),
        }
    }
}

/// Vector index (turbopuffer) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// API key; required only when the index is queried
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Region used to derive the API host
    pub region: String,

    /// Namespace holding candidate vectors
    pub namespace: String,

    /// Explicit base URL, overriding the region-derived host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            region: "aws-us-west-2".to_string(),
            namespace: "search-test-v4".to_string(),
            base_url: None,
        }
    }
}

/// Evaluation endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Endpoint receiving `{config_path, object_ids}`
    pub endpoint: String,

    /// Identity sent as the `Authorization` header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://mercor-dev--search-eng-interview.modal.run/evaluate".to_string(),
            user_email: None,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout (humantime, e.g. `30s`)
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Number of ids kept in the ranking output
    pub top_n: usize,

    /// Number of nearest candidates fetched by retrieval when not given
    pub default_top_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            default_top_k: 50,
        }
    }
}

/// Configuration for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Whether to log to stdout instead of stderr
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            file: None,
            stdout: false,
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
