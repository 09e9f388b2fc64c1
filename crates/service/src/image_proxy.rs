//! Server-side image fetch for hosts that block hotlinking.

use linkbio_core::constants::{IMAGE_PROXY_DEFAULT_CONTENT_TYPE, IMAGE_PROXY_USER_AGENT};
use reqwest::header::{CONTENT_TYPE, REFERER, USER_AGENT};

use crate::error::{ServiceError, build_client};

/// Image bytes plus the content type to serve them with.
#[derive(Debug)]
pub struct ProxiedImage {
    pub content_type: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ImageProxy {
    client: reqwest::Client,
}

impl ImageProxy {
    pub fn new() -> Result<Self, ServiceError> {
        Ok(Self { client: build_client()? })
    }

    /// Fetches `url` with a crawler User-Agent and the URL itself as Referer.
    ///
    /// Non-success upstream statuses come back as [`ServiceError::Upstream`].
    pub async fn fetch(&self, url: &str) -> Result<ProxiedImage, ServiceError> {
        if url.is_empty() {
            return Err(ServiceError::InvalidInput("Missing URL".to_owned()));
        }

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, IMAGE_PROXY_USER_AGENT)
            .header(REFERER, url)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "image upstream refused");
            return Err(ServiceError::Upstream { status: status.as_u16() });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(IMAGE_PROXY_DEFAULT_CONTENT_TYPE)
            .to_owned();
        let body = response.bytes().await?.to_vec();
        Ok(ProxiedImage { content_type, body })
    }
}
