//! Address book persistence.
//!
//! The whole book is stored as one JSON file. A missing file means a fresh
//! start and loads as an empty book; anything else that goes wrong surfaces
//! as a [`StorageError`].

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JSON-file-backed store for a whole [`AddressBook`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. Nothing is touched on disk until
    /// [`load`](Self::load) or [`save`](Self::save) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the address book from the backing file.
    ///
    /// A missing file is not an error: it loads as an empty book.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` when the file cannot be read and
    /// `StorageError::Corrupt` when its contents are not a valid book.
    pub fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No address book file, starting empty");
                return Ok(AddressBook::new());
            }
            Err(err) => return Err(err.into()),
        };

        let book: AddressBook =
            serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "Loaded address book"
        );
        Ok(book)
    }

    /// Persist the address book to the backing file.
    ///
    /// The JSON is written to a sibling temp file first and then renamed
    /// over the target, so a failed write never clobbers the previous book.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialize` or `StorageError::Io`.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(book).map_err(StorageError::Serialize)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "Saved address book"
        );
        Ok(())
    }
}
