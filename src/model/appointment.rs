//! Appointments between a doctor and a patient.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::fields::{parse_calendar_date, DATE_FORMAT};
use super::{Name, ValidationError};

/// Calendar date of an appointment, written `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

impl Date {
    pub const CONSTRAINTS: &'static str = "Dates should be valid calendar dates in the format DD-MM-YYYY";

    pub fn new(value: &str) -> Result<Self, ValidationError> {
        parse_calendar_date(value)
            .map(Self)
            .ok_or_else(|| ValidationError::new("date", Self::CONSTRAINTS))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl TryFrom<String> for Date {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

/// Time of day of an appointment, written as 24-hour `HHMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time(NaiveTime);

impl Time {
    pub const CONSTRAINTS: &'static str =
        "Times should be in 24-hour HHMM format, between 0000 and 2359";

    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new("time", Self::CONSTRAINTS));
        }
        NaiveTime::parse_from_str(value, "%H%M")
            .map(Self)
            .map_err(|_| ValidationError::new("time", Self::CONSTRAINTS))
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H%M"))
    }
}

impl TryFrom<String> for Time {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Time> for String {
    fn from(value: Time) -> Self {
        value.to_string()
    }
}

/// A booking between a doctor and a patient.
///
/// The doctor and patient are referenced by name, which is a person's weak
/// identity. Equality and ordering are structural; the derived order sorts
/// appointments chronologically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Appointment {
    date: Date,
    time: Time,
    doctor: Name,
    patient: Name,
}

impl Appointment {
    pub fn new(doctor: Name, patient: Name, date: Date, time: Time) -> Self {
        Self {
            date,
            time,
            doctor,
            patient,
        }
    }

    pub fn doctor(&self) -> &Name {
        &self.doctor
    }

    pub fn patient(&self) -> &Name {
        &self.patient
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    /// Returns true if `name` is either party of this appointment.
    pub fn involves(&self, name: &Name) -> bool {
        &self.doctor == name || &self.patient == name
    }

    /// Returns a copy with every reference to `old` replaced by `new`.
    pub fn renamed(&self, old: &Name, new: &Name) -> Self {
        let swap = |n: &Name| if n == old { new.clone() } else { n.clone() };
        Self {
            date: self.date,
            time: self.time,
            doctor: swap(&self.doctor),
            patient: swap(&self.patient),
        }
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with {} on {} at {}",
            self.patient, self.doctor, self.date, self.time
        )
    }
}
