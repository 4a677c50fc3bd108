//! The authoritative collections of persons and appointments.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::warn;

use super::{Appointment, Name, Person};

/// Rejected address-book mutations. The book is unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    #[error("A person named {0} already exists")]
    DuplicatePerson(Name),

    #[error("No person named {0}")]
    PersonNotFound(Name),

    #[error("No doctor named {0}")]
    DoctorNotFound(Name),

    #[error("No patient named {0}")]
    PatientNotFound(Name),

    #[error("Appointment already exists: {0}")]
    DuplicateAppointment(Appointment),

    #[error("No such appointment: {0}")]
    AppointmentNotFound(Appointment),
}

/// Persons in insertion order plus the set of appointments between them.
///
/// Invariants:
/// - no two persons share a name;
/// - every appointment names an existing doctor and an existing patient;
/// - each person's appointment set is exactly the appointments naming them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
    appointments: BTreeSet<Appointment>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from stored parts.
    ///
    /// Duplicate names are an error. Appointments that reference a missing
    /// person, or a person of the wrong kind, are dropped.
    pub fn from_parts(
        persons: Vec<Person>,
        appointments: impl IntoIterator<Item = Appointment>,
    ) -> Result<Self, AddressBookError> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person.with_appointments([]))?;
        }
        for appointment in appointments {
            if let Err(e) = book.add_appointment(appointment) {
                warn!("Dropping stored appointment: {e}");
            }
        }
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn appointments(&self) -> &BTreeSet<Appointment> {
        &self.appointments
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Returns true if a person with the same name exists.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn find_person(&self, name: &Name) -> Option<&Person> {
        self.persons.iter().find(|p| p.name() == name)
    }

    fn position(&self, name: &Name) -> Option<usize> {
        self.persons.iter().position(|p| p.name() == name)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), AddressBookError> {
        if self.has_person(&person) {
            return Err(AddressBookError::DuplicatePerson(person.name().clone()));
        }
        let person = self.linked(person);
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited`.
    ///
    /// A rename re-keys the target's appointments to the new name.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), AddressBookError> {
        let index = self
            .position(target.name())
            .ok_or_else(|| AddressBookError::PersonNotFound(target.name().clone()))?;

        let old_name = target.name();
        let new_name = edited.name().clone();
        let renamed = &new_name != old_name;
        if renamed && self.position(&new_name).is_some() {
            return Err(AddressBookError::DuplicatePerson(new_name));
        }

        if renamed {
            self.appointments = self
                .appointments
                .iter()
                .map(|a| a.renamed(old_name, &new_name))
                .collect();
        }
        self.persons[index] = edited;
        self.relink();
        Ok(())
    }

    /// Removes the person with `target`'s name, together with their appointments.
    pub fn remove_person(&mut self, target: &Person) -> Result<(), AddressBookError> {
        let index = self
            .position(target.name())
            .ok_or_else(|| AddressBookError::PersonNotFound(target.name().clone()))?;

        let removed = self.persons.remove(index);
        self.appointments.retain(|a| !a.involves(removed.name()));
        self.relink();
        Ok(())
    }

    pub fn has_appointment(&self, appointment: &Appointment) -> bool {
        self.appointments.contains(appointment)
    }

    /// Adds an appointment, checking that both parties exist with the right kind.
    pub fn add_appointment(&mut self, appointment: Appointment) -> Result<(), AddressBookError> {
        let doctor = self
            .position(appointment.doctor())
            .filter(|&i| self.persons[i].is_doctor())
            .ok_or_else(|| AddressBookError::DoctorNotFound(appointment.doctor().clone()))?;
        let patient = self
            .position(appointment.patient())
            .filter(|&i| self.persons[i].is_patient())
            .ok_or_else(|| AddressBookError::PatientNotFound(appointment.patient().clone()))?;
        if self.has_appointment(&appointment) {
            return Err(AddressBookError::DuplicateAppointment(appointment));
        }

        self.persons[doctor] = self.persons[doctor].with_appointment(appointment.clone());
        self.persons[patient] = self.persons[patient].with_appointment(appointment.clone());
        self.appointments.insert(appointment);
        Ok(())
    }

    /// Removes an appointment from the book and from both parties.
    pub fn remove_appointment(&mut self, appointment: &Appointment) -> Result<(), AddressBookError> {
        if !self.appointments.remove(appointment) {
            return Err(AddressBookError::AppointmentNotFound(appointment.clone()));
        }
        for person in self.persons.iter_mut() {
            if appointment.involves(person.name()) {
                *person = person.without_appointment(appointment);
            }
        }
        Ok(())
    }

    /// Returns `person` with its appointment set derived from this book.
    fn linked(&self, person: Person) -> Person {
        let own: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.involves(person.name()))
            .cloned()
            .collect();
        person.with_appointments(own)
    }

    /// Recomputes every person's appointment set from the book.
    fn relink(&mut self) {
        let persons = std::mem::take(&mut self.persons);
        self.persons = persons.into_iter().map(|p| self.linked(p)).collect();
    }
}
