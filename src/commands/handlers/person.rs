//! Person commands (add-doctor, add-patient, edit, delete, remark).

use std::collections::BTreeSet;

use tracing::info;

use super::{person_at, CommandError, ExecutableCommand, Index};
use crate::commands::output::CommandResult;
use crate::model::{Address, Email, Model, Name, Person, Phone, Remark, Tag};

/// Adds a doctor or patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPersonCommand {
    person: Person,
}

impl AddPersonCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }
}

impl ExecutableCommand for AddPersonCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }
        model.add_person(self.person.clone())?;
        info!(name = %self.person.name(), kind = self.person.kind().label(), "Added person");
        Ok(CommandResult::persons(format!(
            "New {} added: {}",
            self.person.kind().label(),
            self.person
        )))
    }
}

/// Fields to overwrite on an edited person. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited copy of `person`. Kind, remark and appointments carry over.
    pub fn apply(&self, person: Person) -> Person {
        let mut edited = person;
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(email) = &self.email {
            edited = edited.with_email(email.clone());
        }
        if let Some(address) = &self.address {
            edited = edited.with_address(address.clone());
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.iter().cloned());
        }
        edited
    }
}

/// Edits the person at an index of the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPersonCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditPersonCommand {
    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl ExecutableCommand for EditPersonCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = person_at(model, self.index)?;
        let edited = self.descriptor.apply(target.clone());

        if !target.is_same_person(&edited) && model.has_person(&edited) {
            return Err(CommandError::DuplicatePerson);
        }

        let message = format!("Edited person: {edited}");
        model.set_person(&target, edited)?;
        Ok(CommandResult::persons(message))
    }
}

/// Deletes the person at an index of the displayed list, with their appointments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePersonCommand {
    index: Index,
}

impl DeletePersonCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl ExecutableCommand for DeletePersonCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = person_at(model, self.index)?;
        model.delete_person(&target)?;
        info!(
            name = %target.name(),
            appointments = target.appointments().len(),
            "Deleted person"
        );
        Ok(CommandResult::persons(format!("Deleted person: {target}")))
    }
}

/// Replaces the remark of the person at an index of the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: Index,
    remark: Remark,
}

impl RemarkCommand {
    pub fn new(index: Index, remark: Remark) -> Self {
        Self { index, remark }
    }
}

impl ExecutableCommand for RemarkCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = person_at(model, self.index)?;
        let edited = target.clone().with_remark(self.remark.clone());

        let message = if self.remark.is_empty() {
            format!("Removed remark from person: {edited}")
        } else {
            format!("Added remark to person: {edited}")
        };
        model.set_person(&target, edited)?;
        Ok(CommandResult::persons(message))
    }
}
