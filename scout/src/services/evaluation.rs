//! Evaluation endpoint client.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use super::http::build_client;
use crate::config::{EvaluationConfig, HttpConfig};
use crate::ranking::RankingOutput;
use crate::{Result, ScoutError};

/// Body posted to the evaluation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub config_path: String,
    pub object_ids: Vec<Value>,
}

impl From<RankingOutput> for Submission {
    fn from(output: RankingOutput) -> Self {
        let object_ids = output
            .object_ids
            .into_iter()
            .map(|id| serde_json::to_value(id).unwrap_or(Value::Null))
            .collect();
        Self {
            config_path: output.config_path,
            object_ids,
        }
    }
}

/// Status and payload returned by the evaluation endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub status: u16,
    /// Response body as JSON, or the raw text as a JSON string
    pub payload: Value,
}

impl EvaluationResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn from_body(status: u16, body: String) -> Self {
        let payload = serde_json::from_str(&body).unwrap_or(Value::String(body));
        Self { status, payload }
    }
}

/// Scores a ranked id list
///
/// Non-success statuses are returned in the result rather than as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvaluationService: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<EvaluationResult>;
}

/// HTTP evaluation client authenticating with the user's email
#[derive(Debug, Clone)]
pub struct HttpEvaluator {
    client: Client,
    endpoint: String,
    identity: String,
}

impl HttpEvaluator {
    /// Build a client, failing fast when no user email is configured
    pub fn from_config(config: &EvaluationConfig, http: &HttpConfig) -> Result<Self> {
        let identity = config
            .user_email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .ok_or(ScoutError::MissingCredential {
                name: "User email (evaluation Authorization header)",
                env: "USER_EMAIL",
            })?;

        Ok(Self {
            client: build_client(http.request_timeout)?,
            endpoint: config.endpoint.clone(),
            identity: identity.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Value sent in the `Authorization` header
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

#[async_trait]
impl EvaluationService for HttpEvaluator {
    #[instrument(
        skip(self, submission),
        fields(config = %submission.config_path, ids = submission.object_ids.len())
    )]
    async fn submit(&self, submission: &Submission) -> Result<EvaluationResult> {
        info!(
            endpoint = %self.endpoint,
            authorization = %self.identity,
            body = %serde_json::to_string(submission)?,
            "Posting submission"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, &self.identity)
            .json(submission)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        info!(status, "Evaluation submitted");

        Ok(EvaluationResult::from_body(status, body))
    }
}
