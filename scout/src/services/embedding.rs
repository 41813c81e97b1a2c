//! Embedding provider interface and the Voyage AI client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::http::{build_client, ensure_success, trim_base_url};
use crate::config::{EmbeddingConfig, HttpConfig};
use crate::{Result, ScoutError};

const SERVICE: &str = "embedding service";

/// Turns texts into fixed-length vectors, one per input, in input order
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Model identifier, for logs
    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a [String],
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_type: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
    index: usize,
}

/// Voyage AI embeddings client (`POST {base_url}/v1/embeddings`)
#[derive(Debug, Clone)]
pub struct VoyageEmbedder {
    client: Client,
    api_key: String,
    model: String,
    input_type: Option<String>,
    endpoint: String,
}

impl VoyageEmbedder {
    /// Build a client, failing fast when no API key is configured
    pub fn from_config(config: &EmbeddingConfig, http: &HttpConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ScoutError::MissingCredential {
                name: "Voyage API key",
                env: "VOYAGE_API_KEY",
            })?;

        Ok(Self {
            client: build_client(http.request_timeout)?,
            api_key: api_key.to_string(),
            model: config.model.clone(),
            input_type: config.input_type.clone(),
            endpoint: format!("{}/v1/embeddings", trim_base_url(&config.base_url)),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmbeddingProvider for VoyageEmbedder {
    #[instrument(skip(self, texts), fields(model = %self.model, count = texts.len()))]
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let request = EmbeddingRequest {
            input: texts,
            model: &self.model,
            input_type: self.input_type.as_deref(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;
        let body: EmbeddingResponse = response.json().await?;

        let vectors = order_embeddings(body, texts.len())?;
        debug!(dimensions = vectors.first().map(Vec::len).unwrap_or(0), "Received embeddings");
        Ok(vectors)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Put vectors back in input order and check one came back per input
fn order_embeddings(response: EmbeddingResponse, expected: usize) -> Result<Vec<Vec<f32>>> {
    let invalid = |body: String| ScoutError::Service {
        service: SERVICE,
        status: 200,
        body,
    };

    if response.data.len() != expected {
        return Err(invalid(format!(
            "expected {} embeddings, received {}",
            expected,
            response.data.len()
        )));
    }

    let mut slots: Vec<Option<Vec<f32>>> = vec![None; expected];
    for datum in response.data {
        match slots.get_mut(datum.index) {
            Some(slot) if slot.is_none() => *slot = Some(datum.embedding),
            _ => return Err(invalid(format!("unexpected embedding index {}", datum.index))),
        }
    }

    slots
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| invalid("missing embedding in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> EmbeddingResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let config = EmbeddingConfig {
            api_key: Some("   ".to_string()),
            ..EmbeddingConfig::default()
        };
        let err = VoyageEmbedder::from_config(&config, &HttpConfig::default()).unwrap_err();
        assert!(matches!(err, ScoutError::MissingCredential { env: "VOYAGE_API_KEY", .. }));
    }

    #[test]
    fn test_endpoint_from_base_url() {
        let config = EmbeddingConfig {
            api_key: Some("key".to_string()),
            base_url: "https://voyage.internal/".to_string(),
            ..EmbeddingConfig::default()
        };
        let embedder = VoyageEmbedder::from_config(&config, &HttpConfig::default()).unwrap();
        assert_eq!(embedder.endpoint(), "https://voyage.internal/v1/embeddings");
        assert_eq!(embedder.model(), "voyage-3");
    }

    #[test]
    fn test_request_body_shape() {
        let input = vec!["tax lawyer".to_string()];
        let request = EmbeddingRequest {
            input: &input,
            model: "voyage-3",
            input_type: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"input": ["tax lawyer"], "model": "voyage-3"})
        );
    }

    #[test]
    fn test_order_embeddings_reorders_by_index() {
        let body = response(json!({
            "object": "list",
            "data": [
                {"object": "embedding", "embedding": [0.2, 0.2], "index": 1},
                {"object": "embedding", "embedding": [0.1, 0.1], "index": 0}
            ],
            "model": "voyage-3"
        }));
        let vectors = order_embeddings(body, 2).unwrap();
        assert_eq!(vectors, vec![vec![0.1, 0.1], vec![0.2, 0.2]]);
    }

    #[test]
    fn test_order_embeddings_count_mismatch() {
        let body = response(json!({"data": [{"embedding": [0.1], "index": 0}]}));
        assert!(order_embeddings(body, 2).is_err());
    }

    #[test]
    fn test_order_embeddings_duplicate_index() {
        let body = response(json!({"data": [
            {"embedding": [0.1], "index": 0},
            {"embedding": [0.2], "index": 0}
        ]}));
        assert!(order_embeddings(body, 2).is_err());
    }
}
