//! Field parsers shared by the command parsers.
//!
//! Each helper trims its input and runs the field's own validation. The
//! resulting [`ParseError`] carries the field's constraint message; callers
//! attach the usage text of the command being parsed.

use std::collections::BTreeSet;

use super::handlers::Index;
use super::tokenizer::ParseError;
use crate::model::{
    Address, Date, DateOfBirth, Email, Gender, Name, Phone, Remark, Specialty, Tag, Time,
    ValidationError,
};

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

impl From<ValidationError> for ParseError {
    fn from(err: ValidationError) -> Self {
        ParseError::new(err.to_string())
    }
}

/// Parses a one-based index. Zero, signs and non-digits are rejected.
pub fn parse_index(value: &str) -> Result<Index, ParseError> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(MESSAGE_INVALID_INDEX));
    }
    value
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::new(MESSAGE_INVALID_INDEX))
}

pub fn parse_name(value: &str) -> Result<Name, ParseError> {
    Ok(Name::new(value.trim())?)
}

pub fn parse_phone(value: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(value.trim())?)
}

pub fn parse_email(value: &str) -> Result<Email, ParseError> {
    Ok(Email::new(value.trim())?)
}

pub fn parse_address(value: &str) -> Result<Address, ParseError> {
    Ok(Address::new(value.trim())?)
}

/// Remarks accept any text, including the empty remark.
pub fn parse_remark(value: &str) -> Result<Remark, ParseError> {
    Ok(Remark::new(value.trim())?)
}

pub fn parse_specialty(value: &str) -> Result<Specialty, ParseError> {
    Ok(Specialty::new(value.trim())?)
}

pub fn parse_date_of_birth(value: &str) -> Result<DateOfBirth, ParseError> {
    Ok(DateOfBirth::new(value.trim())?)
}

pub fn parse_gender(value: &str) -> Result<Gender, ParseError> {
    Ok(Gender::new(value.trim())?)
}

pub fn parse_date(value: &str) -> Result<Date, ParseError> {
    Ok(Date::new(value.trim())?)
}

pub fn parse_time(value: &str) -> Result<Time, ParseError> {
    Ok(Time::new(value.trim())?)
}

pub fn parse_tag(value: &str) -> Result<Tag, ParseError> {
    Ok(Tag::new(value.trim())?)
}

/// Parses every tag value. Duplicates collapse into one tag.
pub fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    values.iter().map(|v| parse_tag(v)).collect()
}
