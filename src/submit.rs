//! The outbound persistence boundary.
//!
//! One POST per submission attempt: no retry, no timeout, no cancellation.
//! A failure leaves the draft untouched; the user is the retry mechanism.

use serde::Deserialize;

use crate::config::Config;
use crate::error::Error;
use crate::model::payload::EventPayload;

/// The record the persistence service returns for a created event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    pub id: String,
}

/// The persistence service that accepts a normalized event payload.
#[allow(async_fn_in_trait)]
pub trait SubmitEndpoint {
    /// One attempt; failures are surfaced to the caller as-is.
    async fn create_event(&self, payload: &EventPayload) -> Result<CreatedEvent, Error>;
}

/// HTTP implementation of the submission boundary.
#[derive(Debug, Clone)]
pub struct HttpSubmitEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpSubmitEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.submit_url())
    }
}

impl SubmitEndpoint for HttpSubmitEndpoint {
    async fn create_event(&self, payload: &EventPayload) -> Result<CreatedEvent, Error> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
