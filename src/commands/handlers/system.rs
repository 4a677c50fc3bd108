//! System commands (help, clear, exit).

use tracing::info;

use super::{CommandError, ExecutableCommand};
use crate::commands::definitions::generate_help_text;
use crate::commands::output::{CommandResult, ControlAction};
use crate::model::{AddressBook, Model};

pub const MESSAGE_CLEARED: &str = "Address book has been cleared!";
pub const MESSAGE_EXIT: &str = "Exiting address book as requested ...";

/// Handle help command.
pub fn handle_help() -> CommandResult {
    CommandResult::with_action(generate_help_text(), ControlAction::ShowHelp)
}

/// Handle exit command.
pub fn handle_exit() -> CommandResult {
    CommandResult::with_action(MESSAGE_EXIT, ControlAction::Exit)
}

/// Removes every person and appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand;

impl ExecutableCommand for ClearCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let removed = model.address_book().persons().len();
        model.set_address_book(AddressBook::new());
        info!(removed, "Cleared address book");
        Ok(CommandResult::persons(MESSAGE_CLEARED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::test_support::{appointment, doctor, patient};
    use crate::model::ModelManager;

    #[test]
    fn test_clear_empties_model() {
        let mut book = AddressBook::new();
        let dr = doctor("Dr Lee");
        let alice = patient("Alice");
        book.add_person(dr.clone()).unwrap();
        book.add_person(alice.clone()).unwrap();
        book.add_appointment(appointment(&dr, &alice, "23-04-2023", "1100"))
            .unwrap();
        let mut model = ModelManager::new(book);

        let result = ClearCommand.execute(&mut model).unwrap();

        assert_eq!(result.feedback(), MESSAGE_CLEARED);
        assert!(model.address_book().is_empty());
        assert!(model.appointments().is_empty());
        assert!(model.filtered_person_list().is_empty());
    }

    #[test]
    fn test_clear_on_empty_model() {
        let mut model = ModelManager::default();
        assert!(ClearCommand.execute(&mut model).is_ok());
        assert!(model.address_book().is_empty());
    }

    #[test]
    fn test_help_lists_commands() {
        let result = handle_help();
        assert_eq!(result.action(), &ControlAction::ShowHelp);
        assert!(result.feedback().contains("add-doctor"));
        assert!(result.feedback().contains("list-appt"));
    }

    #[test]
    fn test_exit() {
        let result = handle_exit();
        assert!(result.is_exit());
        assert_eq!(result.feedback(), MESSAGE_EXIT);
    }
}
