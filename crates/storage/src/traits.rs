//! Storage trait abstraction.
//!
//! Every backend can be read. Only the file record is written by the caller;
//! the remote counter increments atomically on its own side.

use async_trait::async_trait;

use crate::error::StorageError;

/// Read access to a durable view count.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Current persisted count. `NotFound` when nothing was persisted yet.
    async fn read_views(&self) -> Result<u64, StorageError>;
}

/// A store the caller writes the next value into (read-then-write).
#[async_trait]
pub trait RecordStore: CounterStore {
    /// Persists `views`, replacing the previous record.
    async fn write_views(&self, views: u64) -> Result<(), StorageError>;
}

/// A store that increments on its own side and reports the new value.
#[async_trait]
pub trait AtomicCounter: CounterStore {
    /// Increments the count by one and returns the new value.
    async fn hit_views(&self) -> Result<u64, StorageError>;
}
