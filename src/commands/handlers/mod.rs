//! Command objects for the clinic address book.
//!
//! Each command is an immutable value holding its validated payload. Running
//! it against a [`Model`] either succeeds with a [`CommandResult`] or fails
//! with a [`CommandError`] and leaves the model untouched.

pub mod appointment;
pub mod find;
pub mod person;
pub mod system;

use thiserror::Error;

use super::output::CommandResult;
use crate::model::address_book::AddressBookError;
use crate::model::{Model, Name, Person};

/// A parsed command that can run against the model.
pub trait ExecutableCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}

/// A command that was well-formed but cannot run against the current model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("The person index provided is invalid")]
    InvalidPersonIndex(usize),

    #[error("This person already exists in the address book")]
    DuplicatePerson,

    #[error("The person {0} no longer exists in the address book")]
    PersonNotFound(Name),

    #[error("No doctor named {0} exists in the address book")]
    DoctorNotFound(Name),

    #[error("No patient named {0} exists in the address book")]
    PatientNotFound(Name),

    #[error("This appointment already exists in the address book")]
    DuplicateAppointment,

    #[error("The appointment provided is invalid")]
    InvalidAppointment,
}

impl From<AddressBookError> for CommandError {
    fn from(err: AddressBookError) -> Self {
        match err {
            AddressBookError::DuplicatePerson(_) => Self::DuplicatePerson,
            AddressBookError::PersonNotFound(name) => Self::PersonNotFound(name),
            AddressBookError::DoctorNotFound(name) => Self::DoctorNotFound(name),
            AddressBookError::PatientNotFound(name) => Self::PatientNotFound(name),
            AddressBookError::DuplicateAppointment(_) => Self::DuplicateAppointment,
            AddressBookError::AppointmentNotFound(_) => Self::InvalidAppointment,
        }
    }
}

/// A one-based position in the displayed person list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Creates an index from a one-based position. Zero is rejected.
    pub fn from_one_based(position: usize) -> Option<Self> {
        (position > 0).then_some(Self(position - 1))
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

/// Resolves `index` against the model's current filtered list.
fn person_at(model: &dyn Model, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_person_list()
        .get(index.zero_based())
        .map(|p| (*p).clone())
        .ok_or(CommandError::InvalidPersonIndex(index.one_based()))
}
