//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::criteria::HardCriteria;
use std::path::Path;
use std::time::Duration;

/// Builder for creating ScoutConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: ScoutConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: ScoutConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ScoutConfig) -> Self {
        Self { config }
    }

    /// Set the embedding model.
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.config.embedding.model = model.into();
        self
    }

    /// Set the embedding API key.
    pub fn with_embedding_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.embedding.api_key = Some(key.into());
        self
    }

    /// Set the vector index API key.
    pub fn with_index_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.index.api_key = Some(key.into());
        self
    }

    /// Set the vector index namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.index.namespace = namespace.into();
        self
    }

    /// Set the vector index region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.config.index.region = region.into();
        self
    }

    /// Point the index client at an explicit base URL.
    pub fn with_index_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.index.base_url = Some(url.into());
        self
    }

    /// Set the evaluation endpoint.
    pub fn with_evaluation_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.evaluation.endpoint = endpoint.into();
        self
    }

    /// Set the identity sent to the evaluation endpoint.
    pub fn with_user_email(mut self, email: impl Into<String>) -> Self {
        self.config.evaluation.user_email = Some(email.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.config.http.request_timeout = timeout;
        self
    }

    /// Set the number of ids kept after ranking.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.config.ranking.top_n = top_n;
        self
    }

    /// Set the default retrieval depth.
    pub fn with_default_top_k(mut self, top_k: usize) -> Self {
        self.config.ranking.default_top_k = top_k;
        self
    }

    /// Add or replace a criteria profile.
    pub fn with_criteria(mut self, name: impl Into<String>, criteria: HardCriteria) -> Self {
        self.config.criteria.insert(name.into(), criteria);
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Create a configuration for development: debug logging, pretty output.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<ScoutConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
