//! The model interface consumed by commands, and its in-memory implementation.

use std::collections::BTreeSet;

use tracing::debug;

use super::address_book::AddressBookError;
use super::{AddressBook, Appointment, Name, Person, PersonFilter, PersonPredicate};

/// Operations commands may perform on the model.
///
/// Mutations either apply fully or return an error and leave the model as it
/// was.
pub trait Model {
    fn address_book(&self) -> &AddressBook;

    /// Replaces the whole address book.
    fn set_address_book(&mut self, address_book: AddressBook);

    /// Returns true if a person with the same name exists.
    fn has_person(&self, person: &Person) -> bool;

    fn find_person(&self, name: &Name) -> Option<&Person>;

    fn add_person(&mut self, person: Person) -> Result<(), AddressBookError>;

    fn delete_person(&mut self, target: &Person) -> Result<(), AddressBookError>;

    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), AddressBookError>;

    /// Persons passing the active filter, in address-book order.
    fn filtered_person_list(&self) -> Vec<&Person>;

    fn update_filtered_person_list(&mut self, filter: PersonFilter);

    fn has_appointment(&self, appointment: &Appointment) -> bool;

    fn add_appointment(&mut self, appointment: Appointment) -> Result<(), AddressBookError>;

    fn delete_appointment(&mut self, appointment: &Appointment) -> Result<(), AddressBookError>;

    fn appointments(&self) -> &BTreeSet<Appointment> {
        self.address_book().appointments()
    }
}

/// In-memory model: an address book plus the active person filter.
#[derive(Debug, Default)]
pub struct ModelManager {
    address_book: AddressBook,
    filter: PersonFilter,
}

impl ModelManager {
    pub fn new(address_book: AddressBook) -> Self {
        debug!(
            persons = address_book.persons().len(),
            appointments = address_book.appointments().len(),
            "Initialising model"
        );
        Self {
            address_book,
            filter: PersonFilter::All,
        }
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn set_address_book(&mut self, address_book: AddressBook) {
        self.address_book = address_book;
    }

    fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    fn find_person(&self, name: &Name) -> Option<&Person> {
        self.address_book.find_person(name)
    }

    fn add_person(&mut self, person: Person) -> Result<(), AddressBookError> {
        self.address_book.add_person(person)?;
        self.filter = PersonFilter::All;
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> Result<(), AddressBookError> {
        self.address_book.remove_person(target)
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), AddressBookError> {
        self.address_book.set_person(target, edited)
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|p| self.filter.test(p))
            .collect()
    }

    fn update_filtered_person_list(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    fn has_appointment(&self, appointment: &Appointment) -> bool {
        self.address_book.has_appointment(appointment)
    }

    fn add_appointment(&mut self, appointment: Appointment) -> Result<(), AddressBookError> {
        self.address_book.add_appointment(appointment)
    }

    fn delete_appointment(&mut self, appointment: &Appointment) -> Result<(), AddressBookError> {
        self.address_book.remove_appointment(appointment)
    }
}
