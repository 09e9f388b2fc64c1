//! Counter backend with enum dispatch.

use async_trait::async_trait;
use linkbio_core::constants::COUNTER_KEY;
use linkbio_core::{BackendKind, ViewsConfig};

use crate::error::StorageError;
use crate::file_store::FileStore;
use crate::remote_store::RemoteStore;
use crate::traits::CounterStore;

/// The one durable store active in this process.
#[derive(Debug)]
pub enum CounterBackend {
    File(FileStore),
    Remote(RemoteStore),
}

impl CounterBackend {
    /// Builds the backend selected by `config`.
    ///
    /// # Errors
    /// Returns an error if the remote HTTP client cannot be built.
    pub fn from_config(config: &ViewsConfig) -> Result<Self, StorageError> {
        match config.backend {
            BackendKind::File => Ok(Self::File(FileStore::new(config.file_path.clone()))),
            BackendKind::Remote => Ok(Self::Remote(RemoteStore::new(
                &config.counter_url,
                &config.namespace(),
                COUNTER_KEY,
            )?)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::File(_) => BackendKind::File,
            Self::Remote(_) => BackendKind::Remote,
        }
    }
}

#[async_trait]
impl CounterStore for CounterBackend {
    async fn read_views(&self) -> Result<u64, StorageError> {
        match self {
            Self::File(s) => s.read_views().await,
            Self::Remote(s) => s.read_views().await,
        }
    }
}
