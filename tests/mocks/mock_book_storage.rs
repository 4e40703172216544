use contact_book::error::{StorageError, StorageResult};
use contact_book::storage::BookStorage;
use contact_book::Record;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock book storage for testing.
///
/// Keeps the last written records in memory, can be told to fail, and
/// tracks method calls for verification. Clones share state, so a test can
/// keep a handle after moving one into an `AddressBook`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookStorage {
    saved: Arc<Mutex<Option<Vec<Record>>>>,
    fail_writes: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookStorage {
    /// Create a new empty MockBookStorage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let storage = Self::new();
        *storage.saved.lock().unwrap() = Some(records);
        storage
    }

    /// Make every following write fail with an I/O error.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// Records from the last successful write.
    pub fn saved(&self) -> Option<Vec<Record>> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookStorage for MockBookStorage {
    fn read(&self) -> StorageResult<Option<Vec<Record>>> {
        self.increment_call_count("read");
        Ok(self.saved.lock().unwrap().clone())
    }

    fn write(&self, records: &[&Record]) -> StorageResult<()> {
        self.increment_call_count("write");
        if *self.fail_writes.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.saved.lock().unwrap() = Some(records.iter().map(|r| (*r).clone()).collect());
        Ok(())
    }
}
