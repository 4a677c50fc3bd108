//! In-memory model for the clinic address book.
//!
//! Entities are immutable value objects whose fields validate themselves on
//! construction. The [`ModelManager`] owns the authoritative collections and
//! the filtered person view that commands operate on.

pub mod address_book;
pub mod appointment;
pub mod fields;
pub mod manager;
pub mod person;
pub mod predicate;
pub mod tag;

pub use address_book::AddressBook;
pub use appointment::{Appointment, Date, Time};
pub use fields::{Address, DateOfBirth, Email, Gender, Name, Phone, Remark, Specialty};
pub use manager::{Model, ModelManager};
pub use person::{Person, PersonKind};
pub use predicate::{FindDoctorPredicate, FindPatientPredicate, PersonFilter, PersonPredicate};
pub use tag::Tag;

use thiserror::Error;

/// A field value that failed its own validation rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{constraint}")]
pub struct ValidationError {
    /// Name of the field that rejected the value.
    pub field: &'static str,
    /// The constraint the value violated, phrased for end users.
    pub constraint: &'static str,
}

impl ValidationError {
    /// Creates a validation error for the given field.
    pub fn new(field: &'static str, constraint: &'static str) -> Self {
        Self { field, constraint }
    }
}
