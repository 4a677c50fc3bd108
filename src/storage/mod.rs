//! Persistence of the address book between runs.
//!
//! The model never touches the file system itself. The application loads the
//! book through a [`Storage`] at startup and hands it back after every
//! successful mutating command.

mod json;

pub use json::JsonStorage;

use std::path::Path;

use crate::error::Result;
use crate::model::AddressBook;

/// Reads and writes the whole address book.
pub trait Storage {
    /// Location of the backing data, for logs and messages.
    fn path(&self) -> &Path;

    /// Loads the stored book. `Ok(None)` means nothing has been stored yet.
    fn read_address_book(&self) -> Result<Option<AddressBook>>;

    /// Replaces the stored book with `book`.
    fn save_address_book(&self, book: &AddressBook) -> Result<()>;
}
