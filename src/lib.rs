//! Contact Book - a command-line address book with birthday reminders.
//!
//! This library stores contacts with validated phone numbers and birthdays,
//! persists the whole book to a JSON file, and computes which contacts have
//! birthdays in the next seven days, shifting weekend congratulation dates
//! to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (phone numbers, birthdays)
//! - **models**: contact records and the address book container
//! - **error**: custom error types for precise error handling
//! - **storage**: JSON file persistence
//! - **commands**: line tokenization, handlers, and the dispatch boundary
//! - **repl**: the interactive command loop
//! - **config**: configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::{AddressBook, ContactRecord, UpcomingBirthday};
pub use storage::JsonFileStore;
