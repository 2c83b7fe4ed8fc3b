//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for birthdays.
///
/// Holds both the parsed calendar date (for arithmetic) and the original
/// `DD.MM.YYYY` text the user entered (for display). Validation happens at
/// construction time, so an invalid date is never stored.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.as_str(), "15.06.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD.MM.YYYY` exactly (two digits, two digits, four
    ///   digits, dot-separated)
    /// - Must denote a real calendar date; `31.02.2024` is rejected,
    ///   `29.02.2024` (leap year) is accepted
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is malformed
    /// or not a real date.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();

        let date = match Self::parse(&text) {
            Some(date) => date,
            None => return Err(ValidationError::InvalidBirthday(text)),
        };

        Ok(Self { text, date })
    }

    /// Strict `DD.MM.YYYY` parse.
    ///
    /// chrono's `%d.%m.%Y` accepts single-digit day and month, so the shape
    /// is checked first and chrono only validates the calendar date.
    fn parse(text: &str) -> Option<NaiveDate> {
        let mut parts = text.split('.');
        let day = parts.next()?;
        let month = parts.next()?;
        let year = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let shape_ok = day.len() == 2
            && month.len() == 2
            && year.len() == 4
            && [day, month, year]
                .iter()
                .all(|p| p.chars().all(|c| c.is_ascii_digit()));
        if !shape_ok {
            return None;
        }

        NaiveDate::parse_from_str(text, "%d.%m.%Y").ok()
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the original `DD.MM.YYYY` text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// Serde support - serialize as the original text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

// Serde support - deserialize from text with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(birthday.as_str(), "15.06.1990");
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_birthday_leap_day() {
        assert!(Birthday::new("29.02.2024").is_ok());
        assert!(Birthday::new("29.02.2023").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2024").is_err());
        assert!(Birthday::new("32.01.2024").is_err());
        assert!(Birthday::new("01.13.2024").is_err());
        assert!(Birthday::new("00.01.2024").is_err());
    }

    #[test]
    fn test_birthday_rejects_malformed_text() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1990-06-15").is_err());
        assert!(Birthday::new("15/06/1990").is_err());
        assert!(Birthday::new("5.6.1990").is_err()); // must be zero-padded
        assert!(Birthday::new("15.06.90").is_err());
        assert!(Birthday::new("15.06.1990.1").is_err());
        assert!(Birthday::new("aa.bb.cccc").is_err());
    }

    #[test]
    fn test_birthday_display_keeps_original_text() {
        let birthday = Birthday::new("01.01.2000").unwrap();
        assert_eq!(format!("{}", birthday), "01.01.2000");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"15.06.1990\"");
    }

    #[test]
    fn test_birthday_deserialization() {
        let birthday: Birthday = serde_json::from_str("\"15.06.1990\"").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"31.02.2024\"");
        assert!(result.is_err());
    }
}
