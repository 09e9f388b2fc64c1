use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use linkbio_core::constants::HTTP_CLIENT_TIMEOUT_SECS;

use crate::error::StorageError;
use crate::traits::{AtomicCounter, CounterStore};

/// Body returned by the counter service for both `get` and `hit`.
#[derive(Debug, Deserialize)]
struct CounterValue {
    /// Null for a key that has never been hit.
    value: Option<u64>,
}

/// Namespaced counter on a remote counting service.
///
/// Addresses `{base_url}/get/{namespace}/{key}` and `{base_url}/hit/{namespace}/{key}`.
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
    namespace: String,
    key: String,
}

impl std::fmt::Debug for RemoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteStore")
            .field("base_url", &self.base_url)
            .field("namespace", &self.namespace)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl RemoteStore {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, namespace: &str, key: &str) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_CLIENT_TIMEOUT_SECS))
            .build()
            .map_err(|e| StorageError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            namespace: namespace.to_owned(),
            key: key.to_owned(),
        })
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn endpoint(&self, op: &str) -> String {
        format!("{}/{op}/{}/{}", self.base_url, self.namespace, self.key)
    }

    async fn call(&self, op: &str) -> Result<u64, StorageError> {
        let response = self.client.get(self.endpoint(op)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::HttpStatus { code: status.as_u16() });
        }
        let body: CounterValue = response.json().await?;
        Ok(body.value.unwrap_or(0))
    }
}

#[async_trait]
impl CounterStore for RemoteStore {
    async fn read_views(&self) -> Result<u64, StorageError> {
        self.call("get").await
    }
}

#[async_trait]
impl AtomicCounter for RemoteStore {
    async fn hit_views(&self) -> Result<u64, StorageError> {
        self.call("hit").await
    }
}
