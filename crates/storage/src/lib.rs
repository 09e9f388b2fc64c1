//! Storage layer for linkbio
//!
//! Two durable homes for the view count: a `{ "views": n }` JSON record on the
//! local filesystem, and a namespaced counter on a remote counting service.
//! Neither store absorbs failures; that is the service layer's job.

mod backend;
mod error;
mod file_store;
mod remote_store;
pub mod traits;

pub use backend::CounterBackend;
pub use error::StorageError;
pub use file_store::{FileStore, ViewRecord};
pub use remote_store::RemoteStore;
