//! On-disk schema for the address book.
//!
//! The storage file is a single UTF-8 JSON document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "Alice", "phones": ["1112223337"], "birthday": "1990.04.12" }
//!   ]
//! }
//! ```
//!
//! - `version` must equal [`STORAGE_VERSION`].
//! - `phones` may be omitted and defaults to an empty list.
//! - `birthday` is omitted when unset and uses `YYYY.MM.DD`.
//!
//! Every value is re-validated on decode, so a hand-edited file cannot
//! smuggle an invalid phone or birthday into the book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
pub const STORAGE_VERSION: u32 = 1;

/// Top-level storage document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredBook {
    pub version: u32,
    pub records: Vec<StoredRecord>,
}

/// One persisted contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub name: Name,

    #[serde(default)]
    pub phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

/// Only the version, read before the rest so newer files fail cleanly.
#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().clone(),
            phones: record.phones().to_vec(),
            birthday: record.birthday().copied(),
        }
    }
}

impl From<StoredRecord> for Record {
    fn from(stored: StoredRecord) -> Self {
        let mut record = Record::with_name(stored.name).with_birthday(stored.birthday);
        // push_phone drops duplicates a hand-edited file might contain.
        for phone in stored.phones {
            record.push_phone(phone);
        }
        record
    }
}

/// Serialize records into the storage document.
pub fn encode(records: &[&Record]) -> StorageResult<Vec<u8>> {
    let book = StoredBook {
        version: STORAGE_VERSION,
        records: records.iter().map(|r| StoredRecord::from(*r)).collect(),
    };
    Ok(serde_json::to_vec_pretty(&book)?)
}

/// Parse a storage document back into records.
///
/// # Errors
///
/// - `StorageError::Serialization` for malformed JSON or invalid values
/// - `StorageError::UnsupportedVersion` for any version but [`STORAGE_VERSION`]
pub fn decode(bytes: &[u8]) -> StorageResult<Vec<Record>> {
    let probe: VersionProbe = serde_json::from_slice(bytes)?;
    if probe.version != STORAGE_VERSION {
        return Err(StorageError::UnsupportedVersion(probe.version));
    }
    let book: StoredBook = serde_json::from_slice(bytes)?;
    Ok(book.records.into_iter().map(Record::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Record {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1112223337").unwrap();
        record.set_birthday("1990.04.12").unwrap();
        record
    }

    #[test]
    fn test_encode_layout() {
        let record = alice();
        let bytes = encode(&[&record]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "version": 1,
                "records": [
                    { "name": "Alice", "phones": ["1112223337"], "birthday": "1990.04.12" }
                ]
            })
        );
    }

    #[test]
    fn test_encode_omits_missing_birthday() {
        let record = Record::new("Bob").unwrap();
        let bytes = encode(&[&record]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains("birthday"));
    }

    #[test]
    fn test_decode_restores_records() {
        let record = alice();
        let decoded = decode(&encode(&[&record]).unwrap()).unwrap();
        assert_eq!(decoded, vec![record]);
    }

    #[test]
    fn test_decode_defaults_phones() {
        let decoded = decode(br#"{"version":1,"records":[{"name":"Carol"}]}"#).unwrap();
        assert_eq!(decoded.len(), 1);
        assert!(decoded[0].phones().is_empty());
        assert!(decoded[0].birthday().is_none());
    }

    #[test]
    fn test_decode_drops_duplicate_phones() {
        let decoded = decode(
            br#"{"version":1,"records":[{"name":"Dan","phones":["1234567890","1234567890"]}]}"#,
        )
        .unwrap();
        assert_eq!(decoded[0].phones().len(), 1);
    }

    #[test]
    fn test_decode_rejects_invalid_phone() {
        let result = decode(br#"{"version":1,"records":[{"name":"Eve","phones":["12"]}]}"#);
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let result = decode(br#"{"version":2,"records":[]}"#);
        assert!(matches!(result, Err(StorageError::UnsupportedVersion(2))));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode(b"\x80\x04pickle"),
            Err(StorageError::Serialization(_))
        ));
    }
}
