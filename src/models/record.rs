//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use tracing::debug;

/// A single contact: a name, an ordered list of unique phones and an
/// optional birthday.
///
/// The name is fixed at construction. Phones keep insertion order and are
/// never duplicated by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create an empty record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Attach a birthday while building a record.
    pub fn with_birthday(mut self, birthday: Option<Birthday>) -> Self {
        self.birthday = birthday;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Adding a number that is already present
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the number is not ten digits.
    pub fn add_phone(&mut self, number: &str) -> BookResult<()> {
        let phone = Phone::new(number)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already validated phone unless it is present.
    pub fn push_phone(&mut self, phone: Phone) {
        if self.phones.contains(&phone) {
            debug!(name = %self.name, phone = %phone, "Phone already present");
            return;
        }
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
    }

    /// Return the first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// If `new` is already on the record elsewhere, the `old` entry is
    /// dropped instead so the list stays free of duplicates.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old` is not on the record
    /// - `BookError::Validation` if `new` is not ten digits
    ///
    /// The phone list is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old.to_string(),
            })?;
        let replacement = Phone::new(new)?;

        debug!(name = %self.name, old, new, "Editing phone");
        match self.phones.iter().position(|p| *p == replacement) {
            Some(existing) if existing != index => {
                self.phones.remove(index);
            }
            _ => self.phones[index] = replacement,
        }
        Ok(())
    }

    /// Remove the first phone equal to `number`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.as_str() == number) {
            debug!(name = %self.name, phone = number, "Removing phone");
            self.phones.remove(index);
        }
    }

    /// Validate and set the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` unless `date` is `YYYY.MM.DD`.
    pub fn set_birthday(&mut self, date: &str) -> BookResult<()> {
        let birthday = Birthday::new(date)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from `today` until this contact's next birthday, or `None` when
    /// no birthday is set.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .map(|birthday| days_until_birthday(birthday.date(), today))
    }

    /// Whether the name contains `query` ignoring case, or any phone
    /// contains it literally.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.as_str().to_lowercase().contains(&needle)
            || self.phones.iter().any(|p| p.contains(query))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

/// Days from `today` until the next anniversary of `birthday`'s month and day.
///
/// The year of `birthday` is ignored. Returns 0 when the anniversary is
/// `today`; an anniversary that has already passed this year rolls over to
/// next year. A Feb 29 birthday falls on Feb 28 in common years.
pub fn days_until_birthday(birthday: NaiveDate, today: NaiveDate) -> i64 {
    let this_year = anniversary(birthday, today.year());
    let next = if this_year < today {
        anniversary(birthday, today.year() + 1)
    } else {
        this_year
    };
    (next - today).num_days()
}

fn anniversary(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
        // Only reachable at the edge of chrono's representable range.
        .unwrap_or(birthday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_record() -> Record {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    #[test]
    fn test_record_new_rejects_blank_name() {
        assert!(matches!(Record::new("  "), Err(ValidationError::EmptyName)));
    }

    #[test]
    fn test_add_phone_is_idempotent() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_preserves_order() {
        let record = sample_record();
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = Record::new("John").unwrap();
        let err = record.add_phone("12345").unwrap_err();
        assert!(matches!(
            err,
            BookError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_find_phone() {
        let record = sample_record();
        assert_eq!(
            record.find_phone("5555555555").map(Phone::as_str),
            Some("5555555555")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_edit_phone_keeps_position() {
        let mut record = sample_record();
        record.edit_phone("1234567890", "1112223333").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1112223333", "5555555555"]);
    }

    #[test]
    fn test_edit_phone_missing_old_is_not_found() {
        let mut record = sample_record();
        let before = record.phones().to_vec();
        let err = record.edit_phone("0000000000", "1112223333").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound { .. }));
        assert_eq!(record.phones(), before.as_slice());
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_phones() {
        let mut record = sample_record();
        let before = record.phones().to_vec();
        let err = record.edit_phone("1234567890", "abc").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert_eq!(record.phones(), before.as_slice());
    }

    #[test]
    fn test_edit_phone_to_existing_number_collapses() {
        let mut record = sample_record();
        record.edit_phone("1234567890", "5555555555").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["5555555555"]);
    }

    #[test]
    fn test_edit_phone_to_same_number() {
        let mut record = sample_record();
        record.edit_phone("1234567890", "1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone() {
        let mut record = sample_record();
        record.remove_phone("1234567890");
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut record = sample_record();
        record.remove_phone("0000000000");
        record.remove_phone("not a phone");
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_display() {
        let record = sample_record();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_display_without_phones() {
        let record = Record::new("Jane").unwrap();
        assert_eq!(record.to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn test_display_with_birthday() {
        let mut record = sample_record();
        record.set_birthday("1990.04.12").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: 1990.04.12"
        );
    }

    #[test]
    fn test_set_birthday_rejects_invalid() {
        let mut record = sample_record();
        record.set_birthday("1990.04.12").unwrap();
        assert!(record.set_birthday("1990/04/12").is_err());
        // Previous value is kept.
        assert_eq!(record.birthday().map(ToString::to_string).as_deref(), Some("1990.04.12"));
        record.clear_birthday();
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_matches() {
        let record = sample_record();
        assert!(record.matches("jo"));
        assert!(record.matches("JOHN"));
        assert!(record.matches("555"));
        assert!(!record.matches("999"));
        assert!(!record.matches("jane"));
    }

    #[test]
    fn test_days_until_birthday_today_is_zero() {
        let today = date(2026, 10, 16);
        assert_eq!(days_until_birthday(date(1990, 10, 16), today), 0);
    }

    #[test]
    fn test_days_until_birthday_tomorrow() {
        let today = date(2026, 10, 16);
        assert_eq!(days_until_birthday(date(1990, 10, 17), today), 1);
    }

    #[test]
    fn test_days_until_birthday_yesterday_rolls_over() {
        let today = date(2026, 10, 16);
        assert_eq!(days_until_birthday(date(1990, 10, 15), today), 364);

        // The span into next year crosses Feb 29, 2028.
        let today = date(2027, 10, 16);
        assert_eq!(days_until_birthday(date(1990, 10, 15), today), 365);
    }

    #[test]
    fn test_days_until_birthday_across_new_year() {
        let today = date(2026, 12, 31);
        assert_eq!(days_until_birthday(date(2000, 1, 1), today), 1);
    }

    #[test]
    fn test_days_until_leap_day_birthday() {
        // Common year: Feb 29 is observed on Feb 28.
        assert_eq!(days_until_birthday(date(2000, 2, 29), date(2026, 2, 28)), 0);
        assert_eq!(days_until_birthday(date(2000, 2, 29), date(2026, 2, 27)), 1);
        // Leap year: the real date is used.
        assert_eq!(days_until_birthday(date(2000, 2, 29), date(2028, 2, 28)), 1);
        // Passed this year, next occurrence is Feb 28, 2027.
        assert_eq!(days_until_birthday(date(2000, 2, 29), date(2026, 3, 1)), 364);
    }

    #[test]
    fn test_record_days_to_birthday() {
        let mut record = sample_record();
        let today = date(2026, 10, 16);
        assert_eq!(record.days_to_birthday(today), None);
        record.set_birthday("1990.10.20").unwrap();
        assert_eq!(record.days_to_birthday(today), Some(4));
    }
}
