use crate::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// One outbound call to an automation webhook. The trait seam exists so
/// route handlers can be driven by static doubles in tests.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// POST `{"query": <query>}` to the endpoint and return the decoded
    /// JSON body. Any status other than 200 short-circuits normalization.
    async fn submit(&self, query: &str) -> Result<Value>;
}

pub struct WebhookClient {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Upstream for WebhookClient {
    async fn submit(&self, query: &str) -> Result<Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query }))
            .send()
            .await?;

        // The upstream contract is "200 or it failed", not 2xx.
        if response.status() != StatusCode::OK {
            debug!(endpoint = %self.endpoint, status = %response.status(), "webhook returned non-200");
            return Err(RelayError::WebhookFailed);
        }

        Ok(response.json::<Value>().await?)
    }
}
