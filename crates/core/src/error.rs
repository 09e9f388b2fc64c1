use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while loading linkbio configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = StdResult<T, CoreError>;
