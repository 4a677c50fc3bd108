//! Find and list commands. These only change the filtered view.

use super::{CommandError, ExecutableCommand};
use crate::commands::output::{CommandResult, ControlAction};
use crate::model::{FindDoctorPredicate, FindPatientPredicate, Model, Name, PersonFilter};

/// Shows doctors whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindDoctorCommand {
    predicate: FindDoctorPredicate,
}

impl FindDoctorCommand {
    pub fn new(predicate: FindDoctorPredicate) -> Self {
        Self { predicate }
    }
}

impl ExecutableCommand for FindDoctorCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(PersonFilter::FindDoctor(self.predicate.clone()));
        Ok(CommandResult::persons(format!(
            "{} doctors listed!",
            model.filtered_person_list().len()
        )))
    }
}

/// Shows patients whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPatientCommand {
    predicate: FindPatientPredicate,
}

impl FindPatientCommand {
    pub fn new(predicate: FindPatientPredicate) -> Self {
        Self { predicate }
    }
}

impl ExecutableCommand for FindPatientCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(PersonFilter::FindPatient(self.predicate.clone()));
        Ok(CommandResult::persons(format!(
            "{} patients listed!",
            model.filtered_person_list().len()
        )))
    }
}

/// Which persons `list`, `list-doctors` and `list-patients` show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    All,
    Doctors,
    Patients,
}

/// Resets the filtered view to everyone, or to one kind of person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand {
    target: ListTarget,
}

impl ListCommand {
    pub fn new(target: ListTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> ListTarget {
        self.target
    }
}

impl ExecutableCommand for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let (filter, message) = match self.target {
            ListTarget::All => (PersonFilter::All, "Listed all persons"),
            ListTarget::Doctors => (PersonFilter::Doctors, "Listed all doctors"),
            ListTarget::Patients => (PersonFilter::Patients, "Listed all patients"),
        };
        model.update_filtered_person_list(filter);
        Ok(CommandResult::persons(message))
    }
}

/// Lists appointments chronologically, optionally only those of one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAppointmentsCommand {
    name: Option<Name>,
}

impl ListAppointmentsCommand {
    pub fn new(name: Option<Name>) -> Self {
        Self { name }
    }
}

impl ExecutableCommand for ListAppointmentsCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let appointments = match &self.name {
            Some(name) => {
                let person = model
                    .find_person(name)
                    .ok_or_else(|| CommandError::PersonNotFound(name.clone()))?;
                person.appointments().iter().cloned().collect::<Vec<_>>()
            }
            None => model.appointments().iter().cloned().collect(),
        };

        Ok(CommandResult::with_action(
            format!("{} appointments listed!", appointments.len()),
            ControlAction::ShowAppointments(appointments),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::test_support::{appointment, doctor, patient};
    use crate::model::{AddressBook, ModelManager};

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn model() -> ModelManager {
        let mut book = AddressBook::new();
        for person in [
            doctor("Alice Lee"),
            doctor("Bob Ong"),
            doctor("Carl Kurz"),
            patient("Alice Tan"),
            patient("Daniel Meier"),
        ] {
            book.add_person(person).unwrap();
        }
        ModelManager::new(book)
    }

    fn names(model: &ModelManager) -> Vec<String> {
        model
            .filtered_person_list()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn test_find_doctor_zero_matches() {
        let mut model = model();
        let before = model.address_book().clone();
        let command = FindDoctorCommand::new(FindDoctorPredicate::new(keywords(&["Zed"])));
        let result = command.execute(&mut model).unwrap();
        assert_eq!(result.feedback(), "0 doctors listed!");
        assert!(names(&model).is_empty());
        assert_eq!(model.address_book(), &before);
    }

    #[test]
    fn test_find_doctor_multiple_matches() {
        let mut model = model();
        let command =
            FindDoctorCommand::new(FindDoctorPredicate::new(keywords(&["alice", "Kurz"])));
        let result = command.execute(&mut model).unwrap();
        assert_eq!(result.feedback(), "2 doctors listed!");
        assert_eq!(result.action(), &ControlAction::ShowPersons);
        assert_eq!(names(&model), vec!["Alice Lee", "Carl Kurz"]);
    }

    #[test]
    fn test_find_patient() {
        let mut model = model();
        let command = FindPatientCommand::new(FindPatientPredicate::new(keywords(&["Alice"])));
        let result = command.execute(&mut model).unwrap();
        assert_eq!(result.feedback(), "1 patients listed!");
        assert_eq!(names(&model), vec!["Alice Tan"]);
    }

    #[test]
    fn test_find_doctor_equality() {
        let first = FindDoctorCommand::new(FindDoctorPredicate::new(keywords(&["first"])));
        let second = FindDoctorCommand::new(FindDoctorPredicate::new(keywords(&["second"])));

        assert_eq!(first, first.clone());
        assert_eq!(
            first,
            FindDoctorCommand::new(FindDoctorPredicate::new(keywords(&["first"])))
        );
        assert_ne!(first, second);
    }

    #[test]
    fn test_find_command_debug_names_predicate() {
        let command = FindDoctorCommand::new(FindDoctorPredicate::new(keywords(&["keyword"])));
        let debug = format!("{command:?}");
        assert!(debug.contains("FindDoctorCommand"));
        assert!(debug.contains("predicate"));
        assert!(debug.contains("keyword"));
    }

    #[test]
    fn test_list_targets() {
        let mut model = model();
        let result = ListCommand::new(ListTarget::Patients)
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback(), "Listed all patients");
        assert_eq!(names(&model), vec!["Alice Tan", "Daniel Meier"]);

        ListCommand::new(ListTarget::All).execute(&mut model).unwrap();
        assert_eq!(names(&model).len(), 5);
    }

    #[test]
    fn test_list_appointments() {
        let mut model = model();
        let dr = doctor("Bob Ong");
        let alice = patient("Alice Tan");
        let daniel = patient("Daniel Meier");
        let later = appointment(&dr, &alice, "24-04-2023", "0900");
        let earlier = appointment(&dr, &daniel, "23-04-2023", "1100");
        model.add_appointment(later.clone()).unwrap();
        model.add_appointment(earlier.clone()).unwrap();

        let result = ListAppointmentsCommand::new(None)
            .execute(&mut model)
            .unwrap();
        assert_eq!(
            result.action(),
            &ControlAction::ShowAppointments(vec![earlier, later.clone()])
        );

        let result = ListAppointmentsCommand::new(Some(alice.name().clone()))
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback(), "1 appointments listed!");
        assert_eq!(result.action(), &ControlAction::ShowAppointments(vec![later]));

        let ghost = Name::new("Ghost").unwrap();
        assert_eq!(
            ListAppointmentsCommand::new(Some(ghost.clone())).execute(&mut model),
            Err(CommandError::PersonNotFound(ghost))
        );
    }
}
