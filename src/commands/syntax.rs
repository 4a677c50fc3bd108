//! Argument prefixes recognised by the command parsers.

use super::tokenizer::Prefix;

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_SPECIALTY: Prefix = Prefix::new("s/");
pub const PREFIX_DATE_OF_BIRTH: Prefix = Prefix::new("dob/");
pub const PREFIX_GENDER: Prefix = Prefix::new("g/");
pub const PREFIX_DOCTOR: Prefix = Prefix::new("doc/");
pub const PREFIX_PATIENT: Prefix = Prefix::new("pat/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_TIME: Prefix = Prefix::new("tm/");
