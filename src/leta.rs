use reqwest::Client;
use serde_json::Value;

use crate::config::SearchEngine;
use crate::error::{RelayError, Result};

/// Thin client for Leta's SvelteKit data endpoint.
#[derive(Debug, Clone)]
pub struct LetaClient {
    http: Client,
    endpoint: String,
}

impl LetaClient {
    pub fn new(endpoint: impl Into<String>) -> LetaClient {
        LetaClient {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the raw `__data.json` payload for `query`.
    pub async fn search(&self, query: &str, engine: SearchEngine) -> Result<Value> {
        tracing::debug!(query, %engine, endpoint = %self.endpoint, "querying leta");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query), ("engine", engine.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Upstream(status));
        }

        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}
