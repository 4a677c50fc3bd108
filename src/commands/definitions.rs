//! Command definitions for declarative command metadata.
//!
//! Each command's usage text lives here. Parsers echo it in their errors so
//! users can correct their input, and `help` is generated from the same table.

/// Usage text for `add-doctor`.
pub const ADD_DOCTOR_USAGE: &str = "add-doctor: Adds a doctor to the address book.\n\
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [s/SPECIALTY] [r/REMARK] [t/TAG]...\n\
Example: add-doctor n/Jane Lim p/98765432 e/jane@clinic.com a/1 Clinic Road s/Cardiology t/senior";

/// Usage text for `add-patient`.
pub const ADD_PATIENT_USAGE: &str = "add-patient: Adds a patient to the address book.\n\
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [dob/DD-MM-YYYY] [g/GENDER] [r/REMARK] [t/TAG]...\n\
Example: add-patient n/John Doe p/91234567 e/john@mail.com a/311 Clementi Ave 2 dob/01-02-1990 g/M";

/// Usage text for `edit`.
pub const EDIT_USAGE: &str = "edit: Edits the details of the person identified by the index number \
used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

/// Usage text for `delete`.
pub const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number used in \
the displayed person list, together with their appointments.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

/// Usage text for `remark`.
pub const REMARK_USAGE: &str = "remark: Edits the remark of the person identified by the index \
number used in the displayed person list. Existing remark will be overwritten by the input.\n\
Parameters: INDEX (must be a positive integer) r/[REMARK]\n\
Example: remark 1 r/Likes to swim.";

/// Usage text for `find-doctor`.
pub const FIND_DOCTOR_USAGE: &str = "find-doctor: Finds all doctors whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find-doctor alice bob charlie\n\
Note: KEYWORDS must only contain alphabets and spaces";

/// Usage text for `find-patient`.
pub const FIND_PATIENT_USAGE: &str = "find-patient: Finds all patients whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find-patient alice bob charlie\n\
Note: KEYWORDS must only contain alphabets and spaces";

/// Usage text for `add-appt`.
pub const ADD_APPOINTMENT_USAGE: &str = "add-appt: Books an appointment between a doctor and a patient.\n\
Parameters: doc/DOCTOR_NAME pat/PATIENT_NAME d/DD-MM-YYYY tm/HHMM\n\
Example: add-appt doc/Jane Lim pat/John Doe d/23-04-2023 tm/1100";

/// Usage text for `delete-appt`.
pub const DELETE_APPOINTMENT_USAGE: &str = "delete-appt: Deletes the appointment between a doctor \
and a patient at the given date and time.\n\
Parameters: doc/DOCTOR_NAME pat/PATIENT_NAME d/DD-MM-YYYY tm/HHMM\n\
Example: delete-appt doc/Jane Lim pat/John Doe d/23-04-2023 tm/1100";

/// Usage text for `list-appt`.
pub const LIST_APPOINTMENTS_USAGE: &str = "list-appt: Lists appointments in date order, \
optionally only those involving the named person.\n\
Parameters: [n/NAME]\n\
Example: list-appt n/John Doe";

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Command word typed by the user.
    pub name: &'static str,
    /// Alternative words for the command.
    pub aliases: &'static [&'static str],
    /// Short description shown in help.
    pub description: &'static str,
    /// Detailed usage information.
    pub usage: &'static str,
    /// Whether a successful run changes the stored address book.
    pub mutates: bool,
    /// Category for grouping in help.
    pub category: CommandCategory,
}

/// Category for grouping commands in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    /// Adding, editing and removing persons.
    Person,
    /// Filtering the person list.
    Find,
    /// Booking and cancelling appointments.
    Appointment,
    /// General commands.
    General,
}

impl CommandCategory {
    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Person => "Person commands",
            Self::Find => "Find and list commands",
            Self::Appointment => "Appointment commands",
            Self::General => "General commands",
        }
    }
}

/// All command definitions.
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "add-doctor",
        aliases: &[],
        description: "Add a doctor",
        usage: ADD_DOCTOR_USAGE,
        mutates: true,
        category: CommandCategory::Person,
    },
    CommandDef {
        name: "add-patient",
        aliases: &[],
        description: "Add a patient",
        usage: ADD_PATIENT_USAGE,
        mutates: true,
        category: CommandCategory::Person,
    },
    CommandDef {
        name: "edit",
        aliases: &[],
        description: "Edit the person at INDEX",
        usage: EDIT_USAGE,
        mutates: true,
        category: CommandCategory::Person,
    },
    CommandDef {
        name: "delete",
        aliases: &[],
        description: "Delete the person at INDEX and their appointments",
        usage: DELETE_USAGE,
        mutates: true,
        category: CommandCategory::Person,
    },
    CommandDef {
        name: "remark",
        aliases: &[],
        description: "Set the remark of the person at INDEX",
        usage: REMARK_USAGE,
        mutates: true,
        category: CommandCategory::Person,
    },
    CommandDef {
        name: "find-doctor",
        aliases: &[],
        description: "Find doctors by name keywords",
        usage: FIND_DOCTOR_USAGE,
        mutates: false,
        category: CommandCategory::Find,
    },
    CommandDef {
        name: "find-patient",
        aliases: &[],
        description: "Find patients by name keywords",
        usage: FIND_PATIENT_USAGE,
        mutates: false,
        category: CommandCategory::Find,
    },
    CommandDef {
        name: "list",
        aliases: &[],
        description: "List all persons",
        usage: "list: Lists all persons.\nExample: list",
        mutates: false,
        category: CommandCategory::Find,
    },
    CommandDef {
        name: "list-doctors",
        aliases: &[],
        description: "List all doctors",
        usage: "list-doctors: Lists all doctors.\nExample: list-doctors",
        mutates: false,
        category: CommandCategory::Find,
    },
    CommandDef {
        name: "list-patients",
        aliases: &[],
        description: "List all patients",
        usage: "list-patients: Lists all patients.\nExample: list-patients",
        mutates: false,
        category: CommandCategory::Find,
    },
    CommandDef {
        name: "add-appt",
        aliases: &[],
        description: "Book an appointment",
        usage: ADD_APPOINTMENT_USAGE,
        mutates: true,
        category: CommandCategory::Appointment,
    },
    CommandDef {
        name: "delete-appt",
        aliases: &[],
        description: "Cancel an appointment",
        usage: DELETE_APPOINTMENT_USAGE,
        mutates: true,
        category: CommandCategory::Appointment,
    },
    CommandDef {
        name: "list-appt",
        aliases: &[],
        description: "List appointments",
        usage: LIST_APPOINTMENTS_USAGE,
        mutates: false,
        category: CommandCategory::Appointment,
    },
    CommandDef {
        name: "clear",
        aliases: &[],
        description: "Remove every person and appointment",
        usage: "clear: Clears the address book.\nExample: clear",
        mutates: true,
        category: CommandCategory::General,
    },
    CommandDef {
        name: "help",
        aliases: &[],
        description: "Show this help message",
        usage: "help: Shows the available commands.\nExample: help",
        mutates: false,
        category: CommandCategory::General,
    },
    CommandDef {
        name: "exit",
        aliases: &["quit"],
        description: "Exit the application",
        usage: "exit: Exits the application.\nExample: exit",
        mutates: false,
        category: CommandCategory::General,
    },
];

/// Generates help text from command definitions.
pub fn generate_help_text() -> String {
    let categories = [
        CommandCategory::Person,
        CommandCategory::Find,
        CommandCategory::Appointment,
        CommandCategory::General,
    ];

    categories
        .iter()
        .filter_map(|category| {
            let cmds: Vec<_> = COMMANDS
                .iter()
                .filter(|c| c.category == *category)
                .collect();

            if cmds.is_empty() {
                return None;
            }

            let command_lines = cmds
                .iter()
                .map(|cmd| {
                    let name = if cmd.aliases.is_empty() {
                        cmd.name.to_string()
                    } else {
                        format!("{}, {}", cmd.name, cmd.aliases.join(", "))
                    };
                    format!("  {:<16} - {}\n", name, cmd.description)
                })
                .collect::<Vec<_>>()
                .join("");

            Some(format!("{}:\n{}", category.display_name(), command_lines))
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Finds a command definition by name or alias.
pub fn find_command(name: &str) -> Option<&'static CommandDef> {
    let name_lower = name.to_lowercase();
    COMMANDS
        .iter()
        .find(|c| c.name == name_lower || c.aliases.iter().any(|a| *a == name_lower))
}
