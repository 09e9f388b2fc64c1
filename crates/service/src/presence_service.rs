use linkbio_core::Presence;
use serde_json::Value;

use crate::error::{ServiceError, build_client};

/// Client for the external Discord presence API.
#[derive(Debug, Clone)]
pub struct PresenceClient {
    client: reqwest::Client,
    base_url: String,
}

impl PresenceClient {
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        Ok(Self { client: build_client()?, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Raw presence payload for `discord_id`, unwrapped from its `data` envelope
    /// when the API uses one.
    pub async fn fetch_raw(&self, discord_id: &str) -> Result<Value, ServiceError> {
        if discord_id.is_empty() {
            return Err(ServiceError::InvalidInput("empty discord id".to_owned()));
        }
        let response = self.client.get(format!("{}/{discord_id}", self.base_url)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Upstream { status: status.as_u16() });
        }
        let body: Value = response.json().await?;
        let data = body.get("data").filter(|d| !d.is_null()).cloned();
        Ok(data.unwrap_or(body))
    }

    /// Presence decoded into the fields the profile card uses.
    pub async fn fetch(&self, discord_id: &str) -> Result<Presence, ServiceError> {
        let raw = self.fetch_raw(discord_id).await?;
        serde_json::from_value(raw)
            .map_err(|e| ServiceError::InvalidInput(format!("unexpected presence payload: {e}")))
    }
}
