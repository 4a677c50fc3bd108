//! JSON file storage.
//!
//! The file holds the persons without their appointment sets, followed by a
//! flat appointment list:
//!
//! ```json
//! {
//!   "persons": [{ "name": "Jane Lim", "kind": "doctor", ... }],
//!   "appointments": [{ "date": "23-04-2023", "time": "1100", "doctor": "Jane Lim", "patient": "John Doe" }]
//! }
//! ```
//!
//! Each person's appointment set is rebuilt on load.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::Storage;
use crate::error::{ClinicError, Result};
use crate::model::{AddressBook, Appointment, Person};

#[derive(Serialize)]
struct StoredBookRef<'a> {
    persons: &'a [Person],
    appointments: &'a BTreeSet<Appointment>,
}

#[derive(Deserialize)]
struct StoredBook {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    appointments: Vec<Appointment>,
}

/// Stores the address book as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_address_book(&self) -> Result<Option<AddressBook>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No data file yet");
                return Ok(None);
            }
            Err(e) => {
                return Err(ClinicError::storage(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let stored: StoredBook = serde_json::from_str(&content).map_err(|e| {
            ClinicError::storage(format!(
                "Data file {} is not in the correct format: {e}",
                self.path.display()
            ))
        })?;

        let book = AddressBook::from_parts(stored.persons, stored.appointments).map_err(|e| {
            ClinicError::storage(format!(
                "Data file {} is inconsistent: {e}",
                self.path.display()
            ))
        })?;

        info!(
            path = %self.path.display(),
            persons = book.persons().len(),
            appointments = book.appointments().len(),
            "Loaded address book"
        );
        Ok(Some(book))
    }

    fn save_address_book(&self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ClinicError::storage(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let stored = StoredBookRef {
            persons: book.persons(),
            appointments: book.appointments(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| ClinicError::internal(format!("Failed to serialize address book: {e}")))?;
        fs::write(&self.path, json).map_err(|e| {
            ClinicError::storage(format!("Failed to write {}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), "Saved address book");
        Ok(())
    }
}
