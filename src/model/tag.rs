//! Tags attached to persons.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A short alphanumeric label. Tag sets deduplicate by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(ValidationError::new("tag", Self::CONSTRAINTS))
        }
    }

    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}
