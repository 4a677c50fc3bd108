//! Doctors and patients.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Address, Appointment, DateOfBirth, Email, Gender, Name, Phone, Remark, Specialty, Tag};

/// Kind-specific payload of a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PersonKind {
    Doctor {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        specialty: Option<Specialty>,
    },
    Patient {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date_of_birth: Option<DateOfBirth>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gender: Option<Gender>,
    },
}

impl PersonKind {
    /// Lower-case label used in messages ("doctor" / "patient").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Doctor { .. } => "doctor",
            Self::Patient { .. } => "patient",
        }
    }
}

/// A person in the address book.
///
/// Persons are immutable: every `with_*` method returns a new value. Two
/// persons are the *same* person when their names match
/// ([`Person::is_same_person`]); they are *equal* only when every identity
/// and data field matches. The appointment set is relationship state and
/// takes no part in equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    remark: Remark,
    #[serde(flatten)]
    kind: PersonKind,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(skip)]
    appointments: BTreeSet<Appointment>,
}

impl Person {
    /// Creates a person with an empty remark, no tags and no appointments.
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, kind: PersonKind) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            remark: Remark::empty(),
            kind,
            tags: BTreeSet::new(),
            appointments: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn kind(&self) -> &PersonKind {
        &self.kind
    }

    /// Read-only view of the tag set.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Read-only view of the appointment set.
    pub fn appointments(&self) -> &BTreeSet<Appointment> {
        &self.appointments
    }

    pub fn is_doctor(&self) -> bool {
        matches!(self.kind, PersonKind::Doctor { .. })
    }

    pub fn is_patient(&self) -> bool {
        matches!(self.kind, PersonKind::Patient { .. })
    }

    pub fn specialty(&self) -> Option<&Specialty> {
        match &self.kind {
            PersonKind::Doctor { specialty } => specialty.as_ref(),
            PersonKind::Patient { .. } => None,
        }
    }

    pub fn date_of_birth(&self) -> Option<DateOfBirth> {
        match &self.kind {
            PersonKind::Patient { date_of_birth, .. } => *date_of_birth,
            PersonKind::Doctor { .. } => None,
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        match &self.kind {
            PersonKind::Patient { gender, .. } => *gender,
            PersonKind::Doctor { .. } => None,
        }
    }

    /// Returns true if both persons have the same name.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    pub fn with_name(self, name: Name) -> Self {
        Self { name, ..self }
    }

    pub fn with_phone(self, phone: Phone) -> Self {
        Self { phone, ..self }
    }

    pub fn with_email(self, email: Email) -> Self {
        Self { email, ..self }
    }

    pub fn with_address(self, address: Address) -> Self {
        Self { address, ..self }
    }

    pub fn with_remark(self, remark: Remark) -> Self {
        Self { remark, ..self }
    }

    pub fn with_tags(self, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            ..self
        }
    }

    pub fn with_appointments(self, appointments: impl IntoIterator<Item = Appointment>) -> Self {
        Self {
            appointments: appointments.into_iter().collect(),
            ..self
        }
    }

    /// Returns a copy that also holds `appointment`.
    pub fn with_appointment(&self, appointment: Appointment) -> Self {
        let mut next = self.clone();
        next.appointments.insert(appointment);
        next
    }

    /// Returns a copy without `appointment`.
    pub fn without_appointment(&self, appointment: &Appointment) -> Self {
        let mut next = self.clone();
        next.appointments.remove(appointment);
        next
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.remark == other.remark
            && self.kind == other.kind
            && self.tags == other.tags
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.phone.hash(state);
        self.email.hash(state);
        self.address.hash(state);
        self.remark.hash(state);
        self.kind.hash(state);
        self.tags.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        match &self.kind {
            PersonKind::Doctor { specialty } => {
                if let Some(specialty) = specialty {
                    write!(f, "; Specialty: {specialty}")?;
                }
            }
            PersonKind::Patient {
                date_of_birth,
                gender,
            } => {
                if let Some(dob) = date_of_birth {
                    write!(f, "; Date of birth: {dob}")?;
                }
                if let Some(gender) = gender {
                    write!(f, "; Gender: {gender}")?;
                }
            }
        }
        if !self.remark.is_empty() {
            write!(f, "; Remark: {}", self.remark)?;
        }
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Builders shared by unit tests across the crate.

    use super::*;
    use crate::model::{Date, Time};

    pub fn doctor(name: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new("91234567").unwrap(),
            Email::new("doctor@clinic.com").unwrap(),
            Address::new("1 Clinic Road").unwrap(),
            PersonKind::Doctor {
                specialty: Some(Specialty::new("Cardiology").unwrap()),
            },
        )
    }

    pub fn patient(name: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new("81234567").unwrap(),
            Email::new("patient@mail.com").unwrap(),
            Address::new("2 Home Street").unwrap(),
            PersonKind::Patient {
                date_of_birth: Some(DateOfBirth::new("01-01-1990").unwrap()),
                gender: Some(Gender::Female),
            },
        )
    }

    pub fn appointment(doctor: &Person, patient: &Person, date: &str, time: &str) -> Appointment {
        Appointment::new(
            doctor.name().clone(),
            patient.name().clone(),
            Date::new(date).unwrap(),
            Time::new(time).unwrap(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_is_same_person() {
        let alice = patient("Alice");
        let other_alice = patient("Alice").with_phone(Phone::new("999").unwrap());
        assert!(alice.is_same_person(&other_alice));
        assert_ne!(alice, other_alice);
        assert!(!alice.is_same_person(&patient("Bob")));
    }

    #[test]
    fn test_equality_covers_data_fields() {
        let alice = patient("Alice");
        assert_eq!(alice, alice.clone());
        assert_ne!(alice, alice.clone().with_remark(Remark::new("note").unwrap()));
        assert_ne!(alice, alice.clone().with_tags([Tag::new("vip").unwrap()]));
        assert_ne!(alice, doctor("Alice"));
    }

    #[test]
    fn test_equality_ignores_appointments() {
        let dr = doctor("Dr Lee");
        let alice = patient("Alice");
        let appt = appointment(&dr, &alice, "23-04-2023", "1100");
        let booked = alice.with_appointment(appt.clone());

        assert_eq!(booked.appointments().len(), 1);
        assert!(alice.appointments().is_empty());
        assert_eq!(alice, booked);
        assert!(booked.without_appointment(&appt).appointments().is_empty());
    }

    #[test]
    fn test_kind_accessors() {
        let dr = doctor("Dr Lee");
        assert!(dr.is_doctor());
        assert_eq!(dr.specialty().map(|s| s.as_str()), Some("Cardiology"));
        assert_eq!(dr.gender(), None);
        assert_eq!(dr.kind().label(), "doctor");

        let p = patient("Alice");
        assert!(p.is_patient());
        assert_eq!(p.gender(), Some(Gender::Female));
        assert!(p.specialty().is_none());
    }

    #[test]
    fn test_display_names_key_fields() {
        let p = patient("Alice")
            .with_remark(Remark::new("Allergic to penicillin").unwrap())
            .with_tags([Tag::new("diabetic").unwrap()]);
        let text = p.to_string();
        assert!(text.starts_with("Alice; Phone: 81234567"));
        assert!(text.contains("Gender: F"));
        assert!(text.contains("Remark: Allergic to penicillin"));
        assert!(text.ends_with("Tags: [diabetic]"));
    }

    #[test]
    fn test_serde_skips_appointments() {
        let dr = doctor("Dr Lee");
        let alice = patient("Alice");
        let booked = alice.with_appointment(appointment(&dr, &alice, "23-04-2023", "1100"));

        let json = serde_json::to_string(&booked).unwrap();
        assert!(json.contains("\"kind\":\"patient\""));
        assert!(!json.contains("appointments"));

        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alice);
        assert!(back.appointments().is_empty());
    }
}
