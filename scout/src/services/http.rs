//! Shared HTTP plumbing for the service clients.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::debug;

use crate::{Result, ScoutError};

/// Build a client with the configured per-request timeout
pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("scout/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ScoutError::from)
}

/// Pass successful responses through; turn anything else into
/// [`ScoutError::Service`] carrying the response body.
pub(crate) async fn ensure_success(service: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!(service, status = status.as_u16(), body = %body, "Service request failed");
    Err(ScoutError::Service {
        service,
        status: status.as_u16(),
        body,
    })
}

/// Strip trailing slashes so paths can be appended with `/`
pub(crate) fn trim_base_url(url: &str) -> &str {
    url.trim_end_matches('/')
}
