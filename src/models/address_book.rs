//! The address book: a name-keyed collection of contact records.

use crate::models::ContactRecord;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Inclusive upper bound, in days, for the upcoming-birthday window.
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday falls within the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The occurrence date shifted off weekends (Saturday and Sunday move
    /// to the following Monday)
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date formatted as `YYYY.MM.DD`.
    pub fn congratulation_text(&self) -> String {
        self.congratulation_date.format("%Y.%m.%d").to_string()
    }
}

/// Key-unique, insertion-order-preserving mapping from contact name to
/// [`ContactRecord`].
///
/// Each key always equals the contained record's name. The book exclusively
/// owns its records; iteration and the upcoming-birthday calculation follow
/// insertion order. Overwriting an existing name replaces the record but
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: HashMap<String, ContactRecord>,
    // Insertion order of the keys in `records`
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name.
    ///
    /// An existing record under the same name is replaced entirely (no
    /// merge); its phones and birthday are gone. The entry keeps its
    /// original insertion position.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().to_string();
        if self.records.insert(name.clone(), record).is_none() {
            self.order.push(name);
        }
    }

    /// Find a record by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Find a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove a record by name.
    ///
    /// Returns `true` when a record was removed; a missing name is a no-op.
    pub fn delete(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_some() {
            self.order.retain(|n| n != name);
            true
        } else {
            false
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.order.iter().map(|name| &self.records[name])
    }

    /// Contacts whose next birthday occurrence falls within the next seven
    /// days of `today`, inclusive on both ends.
    ///
    /// For each record with a birthday, the occurrence is this year's
    /// month/day (rolled to next year when it has already passed). A record
    /// qualifies when `0 <= occurrence - today <= 7` whole days. Occurrences
    /// on Saturday or Sunday have their congratulation date shifted to the
    /// following Monday; the window test uses the unshifted occurrence.
    ///
    /// Results follow the book's insertion order. The calculation is pure:
    /// the same book and `today` always produce the same list.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = birthday_occurrence(birthday.date(), today.year());
            if occurrence < today {
                occurrence = birthday_occurrence(birthday.date(), today.year() + 1);
            }

            let days_until = (occurrence - today).num_days();
            if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
                continue;
            }

            upcoming.push(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: shift_off_weekend(occurrence),
            });
        }

        upcoming
    }
}

/// The concrete date a birthday falls on in `year`.
///
/// A February 29 birthday maps to March 1 in years without a leap day.
fn birthday_occurrence(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
}

/// Move Saturday and Sunday dates forward to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    // Adding up to 2 days to a valid NaiveDate cannot overflow in practice
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}

// Serde support - the book persists as the ordered sequence of records;
// keys are re-derived from record names on load.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<ContactRecord>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
