//! Data models for the contact book.
//!
//! A [`Record`] is one contact; the address book owns a collection of them.

pub mod record;

pub use record::{days_until_birthday, Record};
