//! Appointment commands (add-appt, delete-appt).

use tracing::info;

use super::{CommandError, ExecutableCommand};
use crate::commands::output::CommandResult;
use crate::model::{Appointment, Model};

/// Checks that both parties of `appointment` exist with the right kind.
fn check_parties(model: &dyn Model, appointment: &Appointment) -> Result<(), CommandError> {
    let doctor = appointment.doctor();
    if !model.find_person(doctor).is_some_and(|p| p.is_doctor()) {
        return Err(CommandError::DoctorNotFound(doctor.clone()));
    }
    let patient = appointment.patient();
    if !model.find_person(patient).is_some_and(|p| p.is_patient()) {
        return Err(CommandError::PatientNotFound(patient.clone()));
    }
    Ok(())
}

/// Books an appointment between an existing doctor and patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAppointmentCommand {
    appointment: Appointment,
}

impl AddAppointmentCommand {
    pub fn new(appointment: Appointment) -> Self {
        Self { appointment }
    }
}

impl ExecutableCommand for AddAppointmentCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        check_parties(model, &self.appointment)?;
        if model.has_appointment(&self.appointment) {
            return Err(CommandError::DuplicateAppointment);
        }
        model.add_appointment(self.appointment.clone())?;
        info!(appointment = %self.appointment, "Added appointment");
        Ok(CommandResult::new(format!(
            "New appointment added: {}",
            self.appointment
        )))
    }
}

/// Cancels an appointment, looked up by doctor, patient, date and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAppointmentCommand {
    appointment: Appointment,
}

impl DeleteAppointmentCommand {
    pub fn new(appointment: Appointment) -> Self {
        Self { appointment }
    }
}

impl ExecutableCommand for DeleteAppointmentCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if !model.has_appointment(&self.appointment) {
            return Err(CommandError::InvalidAppointment);
        }
        // Stored appointments always name an existing doctor and patient.
        debug_assert!(check_parties(model, &self.appointment).is_ok());
        model.delete_appointment(&self.appointment)?;
        info!(appointment = %self.appointment, "Deleted appointment");

        let a = &self.appointment;
        Ok(CommandResult::new(format!(
            "Deleted appointment of patient {} with doctor {} on {} at {}",
            a.patient(),
            a.doctor(),
            a.date(),
            a.time()
        )))
    }
}
