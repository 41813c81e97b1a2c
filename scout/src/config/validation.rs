//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &ScoutConfig) -> Result<(), ConfigError> {
    validate_embedding_config(&config.embedding)?;
    validate_index_config(&config.index)?;
    validate_evaluation_config(&config.evaluation)?;
    validate_http_config(&config.http)?;
    validate_ranking_config(&config.ranking)?;

    Ok(())
}

fn require_non_empty(value: &str, what: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!("{} cannot be empty", what)));
    }
    Ok(())
}

/// Validate embedding configuration.
fn validate_embedding_config(config: &EmbeddingConfig) -> Result<(), ConfigError> {
    require_non_empty(&config.model, "Embedding model name")?;
    require_non_empty(&config.base_url, "Embedding base URL")?;

    if let Some(input_type) = config.input_type.as_deref() {
        if !matches!(input_type, "query" | "document") {
            return Err(ConfigError::ValidationError(format!(
                "Embedding input type must be 'query' or 'document', got '{}'",
                input_type
            )));
        }
    }

    Ok(())
}

/// Validate vector index configuration.
fn validate_index_config(config: &IndexConfig) -> Result<(), ConfigError> {
    require_non_empty(&config.namespace, "Index namespace")?;

    // The region only matters when no explicit base URL is set
    match config.base_url.as_deref() {
        Some(url) => require_non_empty(url, "Index base URL"),
        None => require_non_empty(&config.region, "Index region"),
    }
}

fn validate_evaluation_config(config: &EvaluationConfig) -> Result<(), ConfigError> {
    require_non_empty(&config.endpoint, "Evaluation endpoint")
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.request_timeout.is_zero() {
        return Err(ConfigError::ValidationError(
            "HTTP request timeout must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Validate ranking configuration.
fn validate_ranking_config(config: &RankingConfig) -> Result<(), ConfigError> {
    if config.top_n == 0 {
        return Err(ConfigError::ValidationError(
            "Ranking top_n must be at least 1".to_string(),
        ));
    }

    if config.default_top_k == 0 {
        return Err(ConfigError::ValidationError(
            "Ranking default_top_k must be at least 1".to_string(),
        ));
    }

    Ok(())
}
