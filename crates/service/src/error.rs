//! Typed error enum for the service layer.

use linkbio_storage::StorageError;
use thiserror::Error;

/// Service-layer error for the operations that do surface failure to callers.
///
/// The view counter never returns one of these; it degrades instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Building a backend failed at startup.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Outbound request could not be built or sent, or its body could not be read.
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    /// Caller provided invalid input (missing URL, empty id).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// HTTP client could not be built.
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

pub(crate) fn build_client() -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(
            linkbio_core::constants::HTTP_CLIENT_TIMEOUT_SECS,
        ))
        .build()
        .map_err(|e| ServiceError::ClientInit(e.to_string()))
}
