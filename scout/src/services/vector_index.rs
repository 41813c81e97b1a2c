//! Vector index interface and the turbopuffer namespace client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use super::http::{build_client, ensure_success, trim_base_url};
use crate::candidate::Candidate;
use crate::config::{HttpConfig, IndexConfig};
use crate::{Result, ScoutError};

const SERVICE: &str = "vector index";

/// Approximate-nearest-neighbour lookup over candidate records
///
/// Rows come back in the index's own ranking order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<Candidate>>;

    /// Human-readable name of the index, for logs and checks
    fn describe(&self) -> String;
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    rank_by: (&'static str, &'static str, &'a [f32]),
    top_k: usize,
    include_attributes: bool,
}

/// Client for one turbopuffer namespace
#[derive(Debug, Clone)]
pub struct TurbopufferNamespace {
    client: Client,
    api_key: String,
    namespace: String,
    query_url: String,
}

impl TurbopufferNamespace {
    /// Build a client, failing fast when no API key is configured
    pub fn from_config(config: &IndexConfig, http: &HttpConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ScoutError::MissingCredential {
                name: "turbopuffer API key",
                env: "TURBOPUFFER_API_KEY",
            })?;

        let base_url = match &config.base_url {
            Some(url) => trim_base_url(url).to_string(),
            None => format!("https://{}.turbopuffer.com", config.region),
        };

        Ok(Self {
            client: build_client(http.request_timeout)?,
            api_key: api_key.to_string(),
            namespace: config.namespace.clone(),
            query_url: format!("{}/v2/namespaces/{}/query", base_url, config.namespace),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }
}

#[async_trait]
impl VectorIndex for TurbopufferNamespace {
    #[instrument(
        skip(self, vector),
        fields(namespace = %self.namespace, dimensions = vector.len())
    )]
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<Candidate>> {
        let request = QueryRequest {
            rank_by: ("vector", "ANN", vector),
            top_k,
            include_attributes: true,
        };

        let response = self
            .client
            .post(&self.query_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;
        let body: Value = response.json().await?;

        let rows = rows_to_candidates(body)?;
        debug!(rows = rows.len(), "Vector query returned rows");
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("turbopuffer namespace '{}'", self.namespace)
    }
}

/// Convert a query response into candidate records
///
/// Accepts `{"rows": [...]}` or a bare array. Rows that nest their
/// attributes under `attributes` are flattened so every attribute sits at
/// the top level next to `id`.
fn rows_to_candidates(body: Value) -> Result<Vec<Candidate>> {
    let rows = match body {
        Value::Object(mut map) => match map.remove("rows") {
            Some(Value::Array(rows)) => rows,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => return Err(invalid("`rows` is not an array")),
        },
        Value::Array(rows) => rows,
        _ => return Err(invalid("unexpected query response shape")),
    };

    rows.into_iter()
        .map(|row| match row {
            Value::Object(map) => Ok(Candidate::from_attributes(flatten_row(map))),
            _ => Err(invalid("query row is not an object")),
        })
        .collect()
}

fn flatten_row(mut row: Map<String, Value>) -> Map<String, Value> {
    match row.remove("attributes") {
        Some(Value::Object(attributes)) => {
            for (key, value) in attributes {
                row.entry(key).or_insert(value);
            }
        }
        Some(other) => {
            row.insert("attributes".to_string(), other);
        }
        None => {}
    }
    row
}

fn invalid(reason: &str) -> ScoutError {
    ScoutError::Service {
        service: SERVICE,
        status: 200,
        body: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> IndexConfig {
        IndexConfig {
            api_key: Some("tpuf_key".to_string()),
            ..IndexConfig::default()
        }
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let config = IndexConfig {
            api_key: None,
            ..IndexConfig::default()
        };
        let err = TurbopufferNamespace::from_config(&config, &HttpConfig::default()).unwrap_err();
        assert!(err.to_string().contains("TURBOPUFFER_API_KEY"));
    }

    #[test]
    fn test_query_url_from_region() {
        let index = TurbopufferNamespace::from_config(&config(), &HttpConfig::default()).unwrap();
        assert_eq!(
            index.query_url(),
            "https://aws-us-west-2.turbopuffer.com/v2/namespaces/search-test-v4/query"
        );
        assert_eq!(index.describe(), "turbopuffer namespace 'search-test-v4'");
    }

    #[test]
    fn test_query_url_from_base_url() {
        let config = IndexConfig {
            base_url: Some("http://localhost:8080/".to_string()),
            namespace: "people".to_string(),
            ..config()
        };
        let index = TurbopufferNamespace::from_config(&config, &HttpConfig::default()).unwrap();
        assert_eq!(index.query_url(), "http://localhost:8080/v2/namespaces/people/query");
    }

    #[test]
    fn test_request_body_shape() {
        let vector = [0.5f32, -0.5];
        let request = QueryRequest {
            rank_by: ("vector", "ANN", &vector),
            top_k: 50,
            include_attributes: true,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "rank_by": ["vector", "ANN", [0.5, -0.5]],
                "top_k": 50,
                "include_attributes": true
            })
        );
    }

    #[test]
    fn test_rows_are_flattened() {
        let body = json!({
            "rows": [
                {"id": "a", "$dist": 0.1, "name": "first"},
                {"id": "b", "dist": 0.2, "attributes": {"name": "second", "country": "US"}}
            ],
            "performance": {}
        });
        let rows = rows_to_candidates(body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name(), Some("first"));
        assert_eq!(rows[0].distance(), Some(0.1));
        assert_eq!(rows[1].name(), Some("second"));
        assert_eq!(rows[1].country(), Some("US"));
        assert!(rows[1].get("attributes").is_none());
    }

    #[test]
    fn test_flatten_keeps_top_level_id() {
        let body = json!([{"id": "a", "attributes": {"id": "shadow"}}]);
        let rows = rows_to_candidates(body).unwrap();
        assert_eq!(rows[0].get("id"), Some(&json!("a")));
    }

    #[test]
    fn test_empty_and_invalid_responses() {
        assert!(rows_to_candidates(json!({})).unwrap().is_empty());
        assert!(rows_to_candidates(json!({"rows": 3})).is_err());
        assert!(rows_to_candidates(json!([1])).is_err());
        assert!(rows_to_candidates(json!("rows")).is_err());
    }
}
