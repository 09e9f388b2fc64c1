//! Typed error enum for the storage layer.
//!
//! Lets the counter service tell "no record yet" apart from real I/O,
//! corruption and network failures when it logs a degraded read or write.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record has been written yet.
    #[error("not found: view record at {0}")]
    NotFound(String),

    /// Filesystem read/write failure (read-only mount, permissions, ...).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Record exists but is not a valid `{ "views": n }` document.
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Remote counter unreachable or returned an undecodable body.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote counter answered with a non-success status.
    #[error("HTTP status {code} from remote counter")]
    HttpStatus { code: u16 },

    /// HTTP client could not be built.
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl StorageError {
    /// Whether the error only means nothing has been persisted yet.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
