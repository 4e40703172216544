//! File-backed storage with atomic replacement.

use super::schema::{decode, encode};
use super::BookStorage;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores the book as one JSON file.
///
/// Saves write a temporary file next to the target, flush it to disk and
/// rename it over the target, so a crash mid-save never leaves a truncated
/// file behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    /// Directory that receives the temporary file; must be on the same
    /// filesystem as the target for the rename to be atomic.
    staging_dir: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let staging_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self { path, staging_dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BookStorage for FileStorage {
    fn read(&self) -> StorageResult<Option<Vec<Record>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No storage file yet");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };
        decode(&bytes).map(Some)
    }

    fn write(&self, records: &[&Record]) -> StorageResult<()> {
        let bytes = encode(records)?;

        let mut tmp = NamedTempFile::new_in(&self.staging_dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(&bytes).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| StorageError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}
