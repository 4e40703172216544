//! AddressBook: name-keyed contact collection with search and persistence.

use super::pages::Pages;
use crate::config::Config;
use crate::error::{BookError, BookResult, StorageResult};
use crate::models::Record;
use crate::storage::{BookStorage, FileStorage};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A collection of [`Record`]s keyed by contact name.
///
/// The mapping is private; every key always equals its record's name.
/// Iteration, search results and pages follow ascending name order.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
/// use contact_book::storage::FileStorage;
///
/// let mut book = AddressBook::new(FileStorage::new("unused.json"));
/// let mut alice = Record::new("Alice").unwrap();
/// alice.add_phone("1112223337").unwrap();
/// book.add_record(alice);
///
/// assert_eq!(book.find("ali").len(), 1);
/// assert_eq!(book.find("333").len(), 1);
/// assert!(book.find("bob").is_empty());
/// ```
#[derive(Debug)]
pub struct AddressBook<S = FileStorage> {
    records: BTreeMap<String, Record>,
    storage: S,
}

impl AddressBook<FileStorage> {
    /// Empty book backed by the file named in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(FileStorage::new(config.storage_path.clone()))
    }
}

impl<S: BookStorage> AddressBook<S> {
    /// Create an empty book; call [`AddressBook::load`] to read persisted data.
    pub fn new(storage: S) -> Self {
        Self {
            records: BTreeMap::new(),
            storage,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Insert `record`, silently replacing any record with the same name.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().to_string();
        debug!(name = %key, "Adding record");
        self.records.insert(key, record)
    }

    /// Look up a record by name. Lookups trim `name` the same way [`Name`]
    /// does, so `" Bob "` finds the record stored as `Bob`.
    ///
    /// [`Name`]: crate::domain::Name
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name.trim())
    }

    /// Mutable access to one record. A record's name cannot change, so the
    /// key invariant is preserved.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name.trim())
    }

    /// Like [`AddressBook::get_mut`] but reports a missing contact as an error.
    pub fn require_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        let name = name.trim();
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Records whose name contains `query` (ignoring case) or whose phones
    /// contain it literally. Empty when nothing matches.
    pub fn find(&self, query: &str) -> Vec<&Record> {
        let results: Vec<&Record> = self
            .records
            .values()
            .filter(|record| record.matches(query))
            .collect();
        debug!(query, matches = results.len(), "Search complete");
        results
    }

    /// Remove the record for `name`, returning it. Missing names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let name = name.trim();
        let removed = self.records.remove(name);
        if removed.is_some() {
            debug!(name, "Deleted record");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Render the book in blocks of at most `page_size` records.
    ///
    /// Each call returns a fresh iterator starting at the first record.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidArgument` if `page_size` is zero.
    pub fn paginate(&self, page_size: usize) -> BookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(Pages::new(self.records.iter(), page_size))
    }

    /// Records with a birthday in the next `within_days` days (today
    /// included), paired with the days remaining and sorted soonest first.
    pub fn upcoming_birthdays(&self, within_days: i64, today: NaiveDate) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .values()
            .filter_map(|record| record.days_to_birthday(today).map(|days| (record, days)))
            .filter(|(_, days)| *days <= within_days)
            .collect();
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }

    /// Persist every record, replacing the previously stored state.
    pub fn save(&self) -> StorageResult<()> {
        let records: Vec<&Record> = self.records.values().collect();
        self.storage.write(&records)?;
        info!(records = records.len(), "Address book saved");
        Ok(())
    }

    /// Replace the in-memory records with the persisted ones.
    ///
    /// When nothing has been persisted yet the book is left as it is (empty
    /// on a fresh instance) and no error is raised. Any other failure is
    /// returned and the in-memory records are untouched.
    pub fn load(&mut self) -> StorageResult<()> {
        let Some(records) = self.storage.read()? else {
            info!("No saved address book found, starting empty");
            return Ok(());
        };

        self.records = records
            .into_iter()
            .map(|record| (record.name().to_string(), record))
            .collect();
        info!(records = self.records.len(), "Address book loaded");
        Ok(())
    }
}
