//! Core orchestrator for clinic-book.
//!
//! Ties command parsing, the in-memory model and storage together: each line
//! of input is parsed, executed against the model and, when it changed the
//! address book, persisted.

use thiserror::Error;
use tracing::{debug, info};

use crate::commands::{CommandError, CommandResult, CommandRouter, ControlAction, ParseError};
use crate::error::ClinicError;
use crate::model::{Model, ModelManager};
use crate::storage::Storage;

/// Why a line of input could not be carried out.
#[derive(Error, Debug)]
pub enum AppError {
    /// The input did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The command was rejected by the model.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The command ran but the result could not be saved.
    #[error(transparent)]
    Storage(#[from] ClinicError),
}

/// The running application: the model plus where it is stored.
pub struct App {
    model: ModelManager,
    storage: Box<dyn Storage>,
}

impl App {
    pub fn new(model: ModelManager, storage: Box<dyn Storage>) -> Self {
        Self { model, storage }
    }

    /// Loads the stored address book, starting empty if nothing is stored yet.
    pub fn load(storage: Box<dyn Storage>) -> Result<Self, ClinicError> {
        let book = match storage.read_address_book()? {
            Some(book) => book,
            None => {
                info!(path = %storage.path().display(), "Starting with an empty address book");
                Default::default()
            }
        };
        Ok(Self::new(ModelManager::new(book), storage))
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    /// Parses and runs one line of input, saving if the address book changed.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, AppError> {
        let command = CommandRouter::parse(input)?;
        debug!(command = command.word(), "Parsed command");

        let result = command.execute(&mut self.model)?;

        if command.is_mutating() {
            self.storage.save_address_book(self.model.address_book())?;
            debug!(path = %self.storage.path().display(), "Address book saved");
        }
        Ok(result)
    }

    /// Formats a result for display: the feedback, then any list it asks for.
    pub fn render(&self, result: &CommandResult) -> String {
        let lines: Vec<String> = match result.action() {
            ControlAction::ShowPersons => numbered(&self.model.filtered_person_list()),
            ControlAction::ShowAppointments(appointments) => numbered(appointments),
            ControlAction::None | ControlAction::ShowHelp | ControlAction::Exit => Vec::new(),
        };

        let mut out = result.feedback().to_string();
        for line in lines {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}

/// Formats each item as a one-based list entry.
fn numbered<T: std::fmt::Display>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}
