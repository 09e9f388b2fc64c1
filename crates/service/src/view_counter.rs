//! Durable view counter with an in-memory fallback.
//!
//! The count lives in exactly one [`CounterBackend`]. Every backend failure is
//! absorbed here: reads and increments always produce a number, and the failure
//! is reported through `tracing` only.

use std::sync::atomic::{AtomicU64, Ordering};

use linkbio_core::{BackendKind, FallbackPolicy, ViewsConfig};
use linkbio_storage::traits::{AtomicCounter, CounterStore, RecordStore};
use linkbio_storage::{CounterBackend, FileStore, RemoteStore, StorageError};
use tokio::sync::Mutex;

use crate::error::ServiceError;

pub struct ViewCounterService {
    backend: CounterBackend,
    policy: FallbackPolicy,
    /// Best local estimate; never written back to the backend on its own.
    memory: AtomicU64,
    /// Serializes read-compute-write against the file record in this process.
    record_lock: Mutex<()>,
}

impl ViewCounterService {
    #[must_use]
    pub fn new(backend: CounterBackend, policy: FallbackPolicy) -> Self {
        Self { backend, policy, memory: AtomicU64::new(0), record_lock: Mutex::new(()) }
    }

    pub fn from_config(config: &ViewsConfig) -> Result<Self, ServiceError> {
        let backend = CounterBackend::from_config(config)?;
        tracing::info!(
            backend = %config.backend,
            fallback = %config.fallback,
            "view counter initialized"
        );
        Ok(Self::new(backend, config.fallback))
    }

    #[must_use]
    pub const fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    #[must_use]
    pub const fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Current in-memory estimate.
    #[must_use]
    pub fn fallback_value(&self) -> u64 {
        self.memory.load(Ordering::SeqCst)
    }

    /// Reads the current count. Never fails; see [`FallbackPolicy`].
    pub async fn get_count(&self) -> u64 {
        match self.backend.read_views().await {
            Ok(views) => {
                self.observe(views);
                views
            },
            Err(e) => self.read_fallback(&e),
        }
    }

    /// Increments the count and returns the value this request should display.
    ///
    /// A failed write is not retried; the new value is kept in memory only.
    pub async fn increment(&self) -> u64 {
        match &self.backend {
            CounterBackend::File(store) => self.increment_record(store).await,
            CounterBackend::Remote(store) => self.increment_remote(store).await,
        }
    }

    async fn increment_record(&self, store: &FileStore) -> u64 {
        let _guard = self.record_lock.lock().await;
        let next = self.get_count().await.saturating_add(1);
        match store.write_views(next).await {
            Ok(()) => {
                self.observe(next);
                next
            },
            Err(e) => {
                let shown = match self.policy {
                    FallbackPolicy::LastKnown => {
                        self.observe(next);
                        next
                    },
                    FallbackPolicy::Constant => 1,
                };
                tracing::warn!(
                    backend = %BackendKind::File,
                    path = %store.path().display(),
                    error = %e,
                    views = shown,
                    "could not persist view count, keeping it in memory"
                );
                shown
            },
        }
    }

    async fn increment_remote(&self, store: &RemoteStore) -> u64 {
        match store.hit_views().await {
            Ok(views) => {
                self.observe(views);
                views
            },
            Err(e) => {
                let shown = match self.policy {
                    FallbackPolicy::LastKnown => {
                        self.memory.fetch_add(1, Ordering::SeqCst).saturating_add(1)
                    },
                    FallbackPolicy::Constant => 1,
                };
                tracing::warn!(
                    backend = %BackendKind::Remote,
                    namespace = store.namespace(),
                    error = %e,
                    views = shown,
                    "remote counter hit failed, using fallback"
                );
                shown
            },
        }
    }

    fn read_fallback(&self, err: &StorageError) -> u64 {
        let value = match self.policy {
            FallbackPolicy::LastKnown => self.fallback_value(),
            FallbackPolicy::Constant => 0,
        };
        if err.is_not_found() {
            tracing::debug!(fallback = value, "no view record yet");
        } else {
            tracing::warn!(
                backend = %self.backend.kind(),
                error = %err,
                fallback = value,
                "could not read view count, using fallback"
            );
        }
        value
    }

    fn observe(&self, views: u64) {
        self.memory.fetch_max(views, Ordering::SeqCst);
    }
}
