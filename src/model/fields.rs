//! Validated field types shared by doctors and patients.
//!
//! Every type checks its own rule in its constructor, so a value that exists
//! is a valid value. Serde goes through the same constructors, which means a
//! hand-edited data file cannot smuggle in an invalid field.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Date format used for every user-facing date (`23-04-2023`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]{2,}(?:-[A-Za-z0-9]+)*$",
    )
    .expect("valid email regex")
});
static SPECIALTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z ]*$").expect("valid specialty regex"));

/// Declares a string newtype whose constructor checks `$is_valid`.
macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $ty:ident, field = $field:literal, constraint = $constraint:literal, is_valid = $is_valid:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $ty(String);

        impl $ty {
            /// Message shown when a value fails validation.
            pub const CONSTRAINTS: &'static str = $constraint;

            /// Validates and wraps `value`.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if Self::is_valid(&value) {
                    Ok(Self(value))
                } else {
                    Err(ValidationError::new($field, Self::CONSTRAINTS))
                }
            }

            /// Returns true if `value` satisfies this field's rule.
            pub fn is_valid(value: &str) -> bool {
                let check: fn(&str) -> bool = $is_valid;
                check(value)
            }

            /// Returns the underlying string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

validated_string! {
    /// A person's full name. Also the person's weak identity.
    Name,
    field = "name",
    constraint = "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    is_valid = |v| NAME_RE.is_match(v)
}

validated_string! {
    /// A phone number of at least three digits.
    Phone,
    field = "phone",
    constraint = "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    is_valid = |v| PHONE_RE.is_match(v)
}

validated_string! {
    /// An email address of the form `local-part@domain`.
    Email,
    field = "email",
    constraint = "Emails should be of the format local-part@domain. The local-part should only contain \
alphanumeric characters and the special characters +_.- (not consecutively, and not at the start or end). \
The domain is made of labels separated by periods and must end with a label at least 2 characters long.",
    is_valid = |v| EMAIL_RE.is_match(v)
}

validated_string! {
    /// A postal address. Any non-blank text.
    Address,
    field = "address",
    constraint = "Addresses can take any values, and it should not be blank",
    is_valid = |v| v.chars().next().is_some_and(|c| !c.is_whitespace())
}

validated_string! {
    /// Free-text note attached to a person. May be empty.
    Remark,
    field = "remark",
    constraint = "Remarks can take any values",
    is_valid = |_| true
}

validated_string! {
    /// A doctor's medical specialty.
    Specialty,
    field = "specialty",
    constraint = "Specialties should only contain alphabetic characters and spaces, and it should not be blank",
    is_valid = |v| SPECIALTY_RE.is_match(v)
}

impl Remark {
    /// The empty remark.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Remark {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parses a `DD-MM-YYYY` string into a calendar date.
pub(crate) fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    // chrono accepts single-digit days and months; the format does not.
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'-' || bytes[5] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// A patient's date of birth. Must be a real date that is not in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub const CONSTRAINTS: &'static str =
        "Date of birth should be a valid date in the format DD-MM-YYYY and must not be in the future";

    /// Parses a `DD-MM-YYYY` string.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        parse_calendar_date(value)
            .filter(|date| *date <= Local::now().date_naive())
            .map(Self)
            .ok_or_else(|| ValidationError::new("date of birth", Self::CONSTRAINTS))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl TryFrom<String> for DateOfBirth {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<DateOfBirth> for String {
    fn from(value: DateOfBirth) -> Self {
        value.to_string()
    }
}

/// A patient's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const CONSTRAINTS: &'static str = "Gender should be one of M, F or O";

    /// Parses `M`/`F`/`O` or the full word, case-insensitively.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        match value.to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            "o" | "other" => Ok(Self::Other),
            _ => Err(ValidationError::new("gender", Self::CONSTRAINTS)),
        }
    }

    /// Single-letter code used in the data file.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "O",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for Gender {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.code().to_string()
    }
}
