//! reqwest-backed [`ActuatorClient`].
//!
//! The client is built once and shared; each `activate` call issues a single
//! `POST {"iccid": ...}` with no retries. Failures are classified into
//! [`ActuatorError`] here so the workflow only ever branches on data.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use sim_activator_core::{
    ActuatorClient, ActuatorError, ActuatorRequest, ActuatorResponse, ActuatorResult,
};
use tracing::{debug, warn};

pub const DEFAULT_ACTUATOR_URL: &str = "http://localhost:8444/actuate";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_LOGGED_BODY_CHARS: usize = 512;

pub struct HttpActuatorClient {
    http: Client,
    url: String,
}

impl HttpActuatorClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ActuatorClient for HttpActuatorClient {
    async fn activate(&self, iccid: &str) -> ActuatorResult {
        let payload = ActuatorRequest {
            iccid: iccid.to_string(),
        };
        debug!(url = %self.url, iccid, "forwarding request to actuator");

        let response = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "could not reach actuator");
                ActuatorError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            // The status alone decides; a body that fails to arrive is just empty.
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_LOGGED_BODY_CHARS).collect();
            warn!(status = status.as_u16(), %body, "actuator rejected activation");
            return Err(ActuatorError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ActuatorError::Unreachable(e.to_string())
            } else {
                ActuatorError::Malformed(format!("failed to read response body: {e}"))
            }
        })?;

        parse_response(&body)
    }
}

/// An empty body or JSON `null` is the "no result" case, not an error.
fn parse_response(body: &str) -> ActuatorResult {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<ActuatorResponse>>(body)
        .map_err(|e| ActuatorError::Malformed(e.to_string()))
}
