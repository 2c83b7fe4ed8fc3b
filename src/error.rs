//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Domain validation errors live in [`crate::domain::errors`]; the
//! enums here cover record invariants, command dispatch, persistence, and
//! configuration.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a record invariant is violated.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A phone or birthday value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit does not exist on the record
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// The record already has a birthday
    #[error("Only one birthday allowed per record")]
    BirthdayAlreadySet,
}

/// Errors that can occur while handling a single command.
///
/// Every variant renders as a plain message; the dispatcher converts these
/// to strings at the boundary, so a malformed command never terminates the
/// process.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong number of arguments for the command
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// A phone or birthday value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record invariant was violated
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Errors that can occur during address book persistence.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("Address book I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The data file exists but is not a valid address book
    #[error("Address book file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the address book failed
    #[error("Failed to serialize address book: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
