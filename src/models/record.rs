//! Contact record: one person's name, phones, and birthday.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// Owns an immutable name, an ordered sequence of phone numbers (duplicates
/// permitted, insertion order preserved), and at most one birthday. The
/// phone and birthday fields only ever hold validated values; raw text goes
/// through [`PhoneNumber::new`] and [`Birthday::new`] on the way in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRecord {
    /// Contact name; immutable after creation and used as the book key
    name: String,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Optional birthday; at most one per record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with an empty phone sequence and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Get the contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the phone sequence in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Get the birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone sequence.
    ///
    /// Duplicates are permitted and kept; the sequence is not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when `value` is not exactly
    /// 10 digits. The sequence is unchanged on error.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone number equal to `value`.
    ///
    /// Returns `true` when a phone was removed. A missing phone is not an
    /// error; the caller reports it informationally. The order of the
    /// remaining phones is preserved.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with a validated `new` value.
    ///
    /// The replacement happens in place, so the phone keeps its position in
    /// the sequence.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` when `new` is not a valid phone
    /// number, and `RecordError::PhoneNotFound` when `old` is not on the
    /// record. The record is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), RecordError> {
        let replacement = PhoneNumber::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(RecordError::PhoneNotFound(old.to_string())),
        }
    }

    /// Find the first phone number equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Set the record's birthday.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::BirthdayAlreadySet` when the record already has
    /// a birthday, regardless of the new value.
    pub fn add_birthday(&mut self, birthday: Birthday) -> Result<(), RecordError> {
        if self.birthday.is_some() {
            return Err(RecordError::BirthdayAlreadySet);
        }
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .as_ref()
            .map_or("Not set", |b| b.as_str());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phones(phones: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::new("John");
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = ContactRecord::new("John");
        assert_eq!(record.name(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_validates() {
        let mut record = ContactRecord::new("John");
        assert!(record.add_phone("12345").is_err());
        assert!(record.phones().is_empty());

        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_keeps_duplicates_and_order() {
        let record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        let values: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
        assert_eq!(values, ["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        assert!(record.remove_phone("1111111111"));
        let values: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
        assert_eq!(values, ["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_phone_missing_is_soft() {
        let mut record = record_with_phones(&["1111111111"]);
        assert!(!record.remove_phone("9999999999"));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "3333333333"]);
        record.edit_phone("2222222222", "4444444444").unwrap();

        let values: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
        assert_eq!(values, ["1111111111", "4444444444", "3333333333"]);
        assert!(record.find_phone("2222222222").is_none());
        assert!(record.find_phone("4444444444").is_some());
    }

    #[test]
    fn test_edit_phone_missing_old_is_reported() {
        let mut record = record_with_phones(&["1111111111"]);
        let err = record.edit_phone("9999999999", "4444444444").unwrap_err();
        assert!(matches!(err, RecordError::PhoneNotFound(_)));
        // record unchanged
        assert_eq!(record.phones().len(), 1);
        assert!(record.find_phone("1111111111").is_some());
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record_unchanged() {
        let mut record = record_with_phones(&["1111111111"]);
        let err = record.edit_phone("1111111111", "abc").unwrap_err();
        assert!(matches!(err, RecordError::Validation(_)));
        assert!(record.find_phone("1111111111").is_some());
    }

    #[test]
    fn test_find_phone() {
        let record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.find_phone("2222222222").map(PhoneNumber::as_str),
            Some("2222222222")
        );
        assert!(record.find_phone("3333333333").is_none());
    }

    #[test]
    fn test_add_birthday_only_once() {
        let mut record = ContactRecord::new("John");
        record
            .add_birthday(Birthday::new("15.06.1990").unwrap())
            .unwrap();

        let err = record
            .add_birthday(Birthday::new("01.01.2000").unwrap())
            .unwrap_err();
        assert!(matches!(err, RecordError::BirthdayAlreadySet));
        assert_eq!(record.birthday().unwrap().as_str(), "15.06.1990");
    }

    #[test]
    fn test_display() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1111111111; 2222222222, birthday: Not set"
        );

        record
            .add_birthday(Birthday::new("15.06.1990").unwrap())
            .unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1111111111; 2222222222, birthday: 15.06.1990"
        );
    }

    #[test]
    fn test_record_json_round_trip() {
        let mut record = record_with_phones(&["1111111111"]);
        record
            .add_birthday(Birthday::new("29.02.2024").unwrap())
            .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let restored: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn test_record_deserialization_rejects_bad_phone() {
        let json = r#"{"name":"John","phones":["123"]}"#;
        let result: Result<ContactRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
