//! HTTP transport for check-in submission.
//!
//! One JSON `POST` per submission. Success is any 2xx status; everything
//! else, including transport failures, is a [`SubmitError`] — the response
//! body is never inspected.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::checkin::traits::CheckInTransport;
use crate::checkin::types::CheckInPayload;

/// Placeholder collection endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to deliver check-ins.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Errors from check-in submission. The session collapses every variant
/// into the single user-facing failure message.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}")]
    Status { status: StatusCode },
}

/// reqwest-backed [`CheckInTransport`].
#[derive(Debug, Clone)]
pub struct HttpSubmitClient {
    client: Client,
    endpoint: String,
}

impl HttpSubmitClient {
    pub fn new(config: SubmitConfig) -> Result<Self, SubmitError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CheckInTransport for HttpSubmitClient {
    async fn send(&self, payload: &CheckInPayload) -> Result<(), SubmitError> {
        debug!(endpoint = %self.endpoint, "Posting check-in payload");
        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status { status })
        }
    }
}
