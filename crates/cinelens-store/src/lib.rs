//! Device-local persisted state: the current-user slot and the per-movie
//! review table. Both are synchronous whole-record JSON files with
//! last-writer-wins semantics and no network dependency.

pub mod error;
pub mod profile;
pub mod reviews;

pub use error::StoreError;
pub use profile::ProfileStore;
pub use reviews::ReviewStore;

use std::path::Path;

/// Atomic write: write to temp file, then rename. A crash mid-write leaves
/// the previous record intact rather than a truncated one.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, contents).map_err(|source| StoreError::Write {
        path: temp_path.clone(),
        source,
    })?;
    std::fs::rename(&temp_path, path).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
