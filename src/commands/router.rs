//! Command parsing and routing for the clinic address book.
//!
//! Parses a line of user input into a [`Command`] holding fully validated
//! values. Parsing never touches the model, so a parse failure has no
//! side effects.

use super::definitions::{
    find_command, generate_help_text, ADD_APPOINTMENT_USAGE, ADD_DOCTOR_USAGE, ADD_PATIENT_USAGE,
    DELETE_APPOINTMENT_USAGE, DELETE_USAGE, EDIT_USAGE, FIND_DOCTOR_USAGE, FIND_PATIENT_USAGE,
    LIST_APPOINTMENTS_USAGE, REMARK_USAGE,
};
use super::handlers::appointment::{AddAppointmentCommand, DeleteAppointmentCommand};
use super::handlers::find::{
    FindDoctorCommand, FindPatientCommand, ListAppointmentsCommand, ListCommand, ListTarget,
};
use super::handlers::person::{
    AddPersonCommand, DeletePersonCommand, EditPersonCommand, EditPersonDescriptor,
    RemarkCommand,
};
use super::handlers::system::{handle_exit, handle_help, ClearCommand};
use super::handlers::{CommandError, ExecutableCommand};
use super::output::CommandResult;
use super::parser_util::{
    parse_address, parse_date, parse_date_of_birth, parse_email, parse_gender, parse_index,
    parse_name, parse_phone, parse_remark, parse_specialty, parse_tags, parse_time,
};
use super::syntax::*;
use super::tokenizer::{
    tokenize, ArgumentMultimap, ParseError, Prefix, MESSAGE_INVALID_COMMAND_FORMAT,
};
use crate::model::{
    Appointment, FindDoctorPredicate, FindPatientPredicate, Model, Person, PersonKind,
};

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Parsed user commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a doctor or patient.
    AddPerson(AddPersonCommand),
    /// Edit the person at an index.
    Edit(EditPersonCommand),
    /// Delete the person at an index.
    Delete(DeletePersonCommand),
    /// Replace the remark of the person at an index.
    Remark(RemarkCommand),
    /// Filter the list to doctors matching keywords.
    FindDoctor(FindDoctorCommand),
    /// Filter the list to patients matching keywords.
    FindPatient(FindPatientCommand),
    /// Show everyone, or one kind of person.
    List(ListCommand),
    /// Book an appointment.
    AddAppointment(AddAppointmentCommand),
    /// Cancel an appointment.
    DeleteAppointment(DeleteAppointmentCommand),
    /// List appointments.
    ListAppointments(ListAppointmentsCommand),
    /// Remove everything.
    Clear(ClearCommand),
    /// Show help message.
    Help,
    /// Exit the application.
    Exit,
}

impl Command {
    /// The command word this command was parsed from.
    pub fn word(&self) -> &'static str {
        match self {
            Self::AddPerson(cmd) => match cmd.person().kind() {
                PersonKind::Doctor { .. } => "add-doctor",
                PersonKind::Patient { .. } => "add-patient",
            },
            Self::Edit(_) => "edit",
            Self::Delete(_) => "delete",
            Self::Remark(_) => "remark",
            Self::FindDoctor(_) => "find-doctor",
            Self::FindPatient(_) => "find-patient",
            Self::List(cmd) => match cmd.target() {
                ListTarget::All => "list",
                ListTarget::Doctors => "list-doctors",
                ListTarget::Patients => "list-patients",
            },
            Self::AddAppointment(_) => "add-appt",
            Self::DeleteAppointment(_) => "delete-appt",
            Self::ListAppointments(_) => "list-appt",
            Self::Clear(_) => "clear",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// Returns true if a successful run changes the stored address book.
    pub fn is_mutating(&self) -> bool {
        find_command(self.word()).is_some_and(|def| def.mutates)
    }

    /// Runs the command against `model`.
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self {
            Self::AddPerson(cmd) => cmd.execute(model),
            Self::Edit(cmd) => cmd.execute(model),
            Self::Delete(cmd) => cmd.execute(model),
            Self::Remark(cmd) => cmd.execute(model),
            Self::FindDoctor(cmd) => cmd.execute(model),
            Self::FindPatient(cmd) => cmd.execute(model),
            Self::List(cmd) => cmd.execute(model),
            Self::AddAppointment(cmd) => cmd.execute(model),
            Self::DeleteAppointment(cmd) => cmd.execute(model),
            Self::ListAppointments(cmd) => cmd.execute(model),
            Self::Clear(cmd) => cmd.execute(model),
            Self::Help => Ok(handle_help()),
            Self::Exit => Ok(handle_exit()),
        }
    }
}

/// Command router for parsing user input.
pub struct CommandRouter;

impl CommandRouter {
    /// Parse user input into a Command.
    pub fn parse(input: &str) -> Result<Command, ParseError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(
                ParseError::new(MESSAGE_INVALID_COMMAND_FORMAT).with_usage(generate_help_text())
            );
        }

        let (word, args) = input
            .split_once(char::is_whitespace)
            .unwrap_or((input, ""));
        let args = args.trim();

        let Some(def) = find_command(word) else {
            return Err(ParseError::new(MESSAGE_UNKNOWN_COMMAND).with_usage(generate_help_text()));
        };

        match def.name {
            "add-doctor" => Self::parse_add_doctor(args),
            "add-patient" => Self::parse_add_patient(args),
            "edit" => Self::parse_edit(args),
            "delete" => Self::parse_delete(args),
            "remark" => Self::parse_remark(args),
            "find-doctor" => {
                let keywords = Self::parse_keywords(args, FIND_DOCTOR_USAGE)?;
                Ok(Command::FindDoctor(FindDoctorCommand::new(
                    FindDoctorPredicate::new(keywords),
                )))
            }
            "find-patient" => {
                let keywords = Self::parse_keywords(args, FIND_PATIENT_USAGE)?;
                Ok(Command::FindPatient(FindPatientCommand::new(
                    FindPatientPredicate::new(keywords),
                )))
            }
            "list" => Ok(Command::List(ListCommand::new(ListTarget::All))),
            "list-doctors" => Ok(Command::List(ListCommand::new(ListTarget::Doctors))),
            "list-patients" => Ok(Command::List(ListCommand::new(ListTarget::Patients))),
            "add-appt" => Self::parse_appointment(args, ADD_APPOINTMENT_USAGE)
                .map(|a| Command::AddAppointment(AddAppointmentCommand::new(a))),
            "delete-appt" => Self::parse_appointment(args, DELETE_APPOINTMENT_USAGE)
                .map(|a| Command::DeleteAppointment(DeleteAppointmentCommand::new(a))),
            "list-appt" => Self::parse_list_appointments(args),
            "clear" => Ok(Command::Clear(ClearCommand)),
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            _ => Err(ParseError::new(MESSAGE_UNKNOWN_COMMAND).with_usage(generate_help_text())),
        }
    }

    /// Tokenizes `args` and checks the required prefixes and an empty preamble.
    fn tokenize_fields(
        args: &str,
        prefixes: &[Prefix],
        required: &[Prefix],
        single_valued: &[Prefix],
        usage: &str,
    ) -> Result<ArgumentMultimap, ParseError> {
        let map = tokenize(args, prefixes);
        if !map.has_all(required) || !map.preamble().is_empty() {
            return Err(ParseError::invalid_command_format(usage));
        }
        map.verify_no_duplicate_prefixes(single_valued)
            .map_err(|e| e.with_usage(usage))?;
        Ok(map)
    }

    /// Builds the name, phone, email, address, remark and tags shared by both kinds.
    fn parse_person(
        map: &ArgumentMultimap,
        kind: PersonKind,
        usage: &str,
    ) -> Result<Person, ParseError> {
        let with_usage = |e: ParseError| e.with_usage(usage);
        let field = |prefix: Prefix| map.value(prefix).unwrap_or_default();

        let person = Person::new(
            parse_name(field(PREFIX_NAME)).map_err(with_usage)?,
            parse_phone(field(PREFIX_PHONE)).map_err(with_usage)?,
            parse_email(field(PREFIX_EMAIL)).map_err(with_usage)?,
            parse_address(field(PREFIX_ADDRESS)).map_err(with_usage)?,
            kind,
        );
        let remark = parse_remark(field(PREFIX_REMARK)).map_err(with_usage)?;
        let tags = parse_tags(map.all_values(PREFIX_TAG)).map_err(with_usage)?;
        Ok(person.with_remark(remark).with_tags(tags))
    }

    fn parse_add_doctor(args: &str) -> Result<Command, ParseError> {
        let map = Self::tokenize_fields(
            args,
            &[
                PREFIX_NAME,
                PREFIX_PHONE,
                PREFIX_EMAIL,
                PREFIX_ADDRESS,
                PREFIX_SPECIALTY,
                PREFIX_REMARK,
                PREFIX_TAG,
            ],
            &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS],
            &[
                PREFIX_NAME,
                PREFIX_PHONE,
                PREFIX_EMAIL,
                PREFIX_ADDRESS,
                PREFIX_SPECIALTY,
                PREFIX_REMARK,
            ],
            ADD_DOCTOR_USAGE,
        )?;

        let specialty = map
            .value(PREFIX_SPECIALTY)
            .map(parse_specialty)
            .transpose()
            .map_err(|e| e.with_usage(ADD_DOCTOR_USAGE))?;
        let person = Self::parse_person(&map, PersonKind::Doctor { specialty }, ADD_DOCTOR_USAGE)?;
        Ok(Command::AddPerson(AddPersonCommand::new(person)))
    }

    fn parse_add_patient(args: &str) -> Result<Command, ParseError> {
        let map = Self::tokenize_fields(
            args,
            &[
                PREFIX_NAME,
                PREFIX_PHONE,
                PREFIX_EMAIL,
                PREFIX_ADDRESS,
                PREFIX_DATE_OF_BIRTH,
                PREFIX_GENDER,
                PREFIX_REMARK,
                PREFIX_TAG,
            ],
            &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS],
            &[
                PREFIX_NAME,
                PREFIX_PHONE,
                PREFIX_EMAIL,
                PREFIX_ADDRESS,
                PREFIX_DATE_OF_BIRTH,
                PREFIX_GENDER,
                PREFIX_REMARK,
            ],
            ADD_PATIENT_USAGE,
        )?;

        let with_usage = |e: ParseError| e.with_usage(ADD_PATIENT_USAGE);
        let date_of_birth = map
            .value(PREFIX_DATE_OF_BIRTH)
            .map(parse_date_of_birth)
            .transpose()
            .map_err(with_usage)?;
        let gender = map
            .value(PREFIX_GENDER)
            .map(parse_gender)
            .transpose()
            .map_err(with_usage)?;
        let kind = PersonKind::Patient {
            date_of_birth,
            gender,
        };
        let person = Self::parse_person(&map, kind, ADD_PATIENT_USAGE)?;
        Ok(Command::AddPerson(AddPersonCommand::new(person)))
    }

    fn parse_edit(args: &str) -> Result<Command, ParseError> {
        let map = tokenize(
            args,
            &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
        );
        let index = parse_index(map.preamble())
            .map_err(|_| ParseError::invalid_command_format(EDIT_USAGE))?;
        map.verify_no_duplicate_prefixes(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])
            .map_err(|e| e.with_usage(EDIT_USAGE))?;

        let with_usage = |e: ParseError| e.with_usage(EDIT_USAGE);
        let mut descriptor = EditPersonDescriptor {
            name: map.value(PREFIX_NAME).map(parse_name).transpose().map_err(with_usage)?,
            phone: map.value(PREFIX_PHONE).map(parse_phone).transpose().map_err(with_usage)?,
            email: map.value(PREFIX_EMAIL).map(parse_email).transpose().map_err(with_usage)?,
            address: map
                .value(PREFIX_ADDRESS)
                .map(parse_address)
                .transpose()
                .map_err(with_usage)?,
            tags: None,
        };

        // A lone empty `t/` clears every tag.
        let tag_values = map.all_values(PREFIX_TAG);
        if !tag_values.is_empty() {
            descriptor.tags = if tag_values.len() == 1 && tag_values[0].is_empty() {
                Some(Default::default())
            } else {
                Some(parse_tags(tag_values).map_err(with_usage)?)
            };
        }

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::new(MESSAGE_NOT_EDITED).with_usage(EDIT_USAGE));
        }
        Ok(Command::Edit(EditPersonCommand::new(index, descriptor)))
    }

    fn parse_delete(args: &str) -> Result<Command, ParseError> {
        let index = parse_index(args).map_err(|_| ParseError::invalid_command_format(DELETE_USAGE))?;
        Ok(Command::Delete(DeletePersonCommand::new(index)))
    }

    fn parse_remark(args: &str) -> Result<Command, ParseError> {
        let map = tokenize(args, &[PREFIX_REMARK]);
        let index = parse_index(map.preamble())
            .map_err(|_| ParseError::invalid_command_format(REMARK_USAGE))?;
        map.verify_no_duplicate_prefixes(&[PREFIX_REMARK])
            .map_err(|e| e.with_usage(REMARK_USAGE))?;
        // A missing `r/` clears the remark, same as an empty one.
        let remark = parse_remark(map.value(PREFIX_REMARK).unwrap_or_default())
            .map_err(|e| e.with_usage(REMARK_USAGE))?;
        Ok(Command::Remark(RemarkCommand::new(index, remark)))
    }

    /// Splits find keywords. Only letters and whitespace are accepted.
    fn parse_keywords(args: &str, usage: &str) -> Result<Vec<String>, ParseError> {
        let args = args.trim();
        if args.is_empty() {
            return Err(ParseError::invalid_command_format(usage));
        }
        if !args.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
            return Err(ParseError::invalid_argument_format(usage));
        }
        Ok(args.split_whitespace().map(str::to_string).collect())
    }

    fn parse_appointment(args: &str, usage: &str) -> Result<Appointment, ParseError> {
        let prefixes = [PREFIX_DOCTOR, PREFIX_PATIENT, PREFIX_DATE, PREFIX_TIME];
        let map = Self::tokenize_fields(args, &prefixes, &prefixes, &prefixes, usage)?;

        let with_usage = |e: ParseError| e.with_usage(usage);
        let field = |prefix: Prefix| map.value(prefix).unwrap_or_default();
        Ok(Appointment::new(
            parse_name(field(PREFIX_DOCTOR)).map_err(with_usage)?,
            parse_name(field(PREFIX_PATIENT)).map_err(with_usage)?,
            parse_date(field(PREFIX_DATE)).map_err(with_usage)?,
            parse_time(field(PREFIX_TIME)).map_err(with_usage)?,
        ))
    }

    fn parse_list_appointments(args: &str) -> Result<Command, ParseError> {
        let map = Self::tokenize_fields(
            args,
            &[PREFIX_NAME],
            &[],
            &[PREFIX_NAME],
            LIST_APPOINTMENTS_USAGE,
        )?;
        let name = map
            .value(PREFIX_NAME)
            .map(parse_name)
            .transpose()
            .map_err(|e| e.with_usage(LIST_APPOINTMENTS_USAGE))?;
        Ok(Command::ListAppointments(ListAppointmentsCommand::new(name)))
    }
}
