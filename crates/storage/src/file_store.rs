use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::traits::{CounterStore, RecordStore};

/// On-disk shape of the view record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRecord {
    /// A missing or null count reads as zero.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub views: u64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// View count kept as a small JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(ToOwned::to_owned).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl CounterStore for FileStore {
    async fn read_views(&self) -> Result<u64, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.display().to_string()));
            },
            Err(e) => return Err(e.into()),
        };
        let record: ViewRecord = serde_json::from_str(&raw)?;
        Ok(record.views)
    }
}

#[async_trait]
impl RecordStore for FileStore {
    /// Writes through a sibling temp file and renames it over the record, so a
    /// crash mid-write never leaves a truncated record behind.
    async fn write_views(&self, views: u64) -> Result<(), StorageError> {
        let body = serde_json::to_vec(&ViewRecord { views })?;
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &body).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}
