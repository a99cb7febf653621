use std::path::PathBuf;
use thiserror::Error;

/// Storage failures are fatal to the operation but not to the process:
/// the store does not retry or queue, and the caller decides what to
/// surface to the user.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize persisted state: {0}")]
    Serialize(#[from] serde_json::Error),
}
