//! Persistence for the address book.
//!
//! The [`BookStorage`] trait abstracts where the book lives so the model can
//! be exercised against an in-memory store in tests. [`FileStorage`] is the
//! production backend: a single JSON document described in [`schema`].

mod file_storage;
pub mod schema;

pub use file_storage::FileStorage;
pub use schema::{StoredBook, StoredRecord, STORAGE_VERSION};

use crate::error::StorageResult;
use crate::models::Record;

/// Backend that can persist and restore the full set of records.
pub trait BookStorage {
    /// Read every persisted record.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet (for a file
    /// backend, when the file does not exist).
    fn read(&self) -> StorageResult<Option<Vec<Record>>>;

    /// Replace the persisted state with `records`.
    fn write(&self, records: &[&Record]) -> StorageResult<()>;
}
