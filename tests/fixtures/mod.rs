//! Test fixtures and sample data.

use chrono::NaiveDate;
use contact_book::Record;

/// Create a record with the given phones. Panics on invalid input.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("valid name");
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    record
}

/// Alice and Bob, the two-contact book used across tests.
///
/// Only Alice's number contains a 7.
#[allow(dead_code)]
pub fn alice_and_bob() -> Vec<Record> {
    vec![
        sample_record("Alice", &["1112223337"]),
        sample_record("Bob", &["4445556660"]),
    ]
}

/// Shorthand for a calendar date.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Sorted (name, phones) pairs for comparing books.
#[allow(dead_code)]
pub fn summary<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<(String, Vec<String>)> {
    let mut pairs: Vec<(String, Vec<String>)> = records
        .into_iter()
        .map(|r| {
            (
                r.name().to_string(),
                r.phones().iter().map(ToString::to_string).collect(),
            )
        })
        .collect();
    pairs.sort();
    pairs
}
