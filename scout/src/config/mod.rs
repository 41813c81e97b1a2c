//! Configuration system for Scout.
//!
//! Configuration is layered from defaults, an optional file, the conventional
//! service environment variables (`VOYAGE_API_KEY`, `TURBOPUFFER_API_KEY`,
//! `USER_EMAIL`, ...) and `SCOUT_`-prefixed overrides, then validated.
//! Credentials are not checked here; each service client checks its own when
//! it is constructed.

mod builder;
mod loader;
mod models;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "scout.toml",
    "scout.yaml",
    "scout.yml",
    "scout.json",
    ".scout/config.toml",
    ".scout/config.yaml",
    ".scout/config.yml",
    ".scout/config.json",
];

/// Environment variable prefix for Scout configuration
pub const ENV_PREFIX: &str = "SCOUT_";

/// Conventional environment variables and the config keys they feed
pub const SERVICE_ENV_VARS: &[(&str, &str)] = &[
    ("VOYAGE_API_KEY", "embedding.api_key"),
    ("VOYAGE_MODEL", "embedding.model"),
    ("TURBOPUFFER_API_KEY", "index.api_key"),
    ("TPUF_REGION", "index.region"),
    ("TPUF_NAMESPACE", "index.namespace"),
    ("EVAL_ENDPOINT", "evaluation.endpoint"),
    ("USER_EMAIL", "evaluation.user_email"),
];

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
