//! Tokenizer for command argument parsing.
//!
//! Splits an argument string such as `2 n/Alice Tan t/friend t/vip` into:
//! - a preamble: the unprefixed leading text (`2`)
//! - prefixed values: every value that follows a recognised prefix, in order
//!   (`n/` → `Alice Tan`, `t/` → `friend`, `vip`)
//!
//! A prefix only counts at the start of the input or after whitespace, so
//! `doc/` inside `http://doc/x` is left alone. Tokenizing never fails; the
//! command parsers decide which absences are errors.

use std::collections::HashMap;
use std::fmt;

/// Message for input that does not follow a command's grammar.
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";
/// Message for arguments that follow the grammar but contain bad characters.
pub const MESSAGE_INVALID_ARGUMENT_FORMAT: &str = "Invalid argument format!";
/// Message for a repeated single-valued prefix.
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";

/// A literal marker introducing a named argument value, such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Result of tokenizing: the preamble plus values grouped by prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// The trimmed unprefixed leading text. Empty if there is none.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Returns true if every prefix in `prefixes` has at least one value.
    pub fn has_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.has(*p))
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(Prefix::as_str)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "{MESSAGE_DUPLICATE_FIELDS}{}",
                duplicated.join(" ")
            )))
        }
    }
}

/// Tokenizes `args` against the recognised `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions = find_prefix_positions(args, prefixes);
    positions.sort_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map(|(at, _)| *at).unwrap_or(args.len());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let start = at + prefix.as_str().len();
        let end = positions.get(i + 1).map(|(next, _)| *next).unwrap_or(args.len());
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }

    multimap
}

/// Byte offsets of every prefix occurrence that starts a token.
fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();

    for &prefix in prefixes {
        let marker = prefix.as_str();
        let mut from = 0;
        while let Some(found) = args[from..].find(marker) {
            let at = from + found;
            let starts_token = at == 0 || args[..at].ends_with(char::is_whitespace);
            if starts_token {
                positions.push((at, prefix));
            }
            from = at + marker.len();
        }
    }

    positions
}

/// Parse error with context for helpful error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error message describing what went wrong.
    pub message: String,
    /// Usage text of the command that failed to parse.
    pub usage: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            usage: None,
        }
    }

    /// Input that does not follow the command's grammar.
    pub fn invalid_command_format(usage: &str) -> Self {
        Self::new(MESSAGE_INVALID_COMMAND_FORMAT).with_usage(usage)
    }

    /// Arguments containing characters the command does not accept.
    pub fn invalid_argument_format(usage: &str) -> Self {
        Self::new(MESSAGE_INVALID_ARGUMENT_FORMAT).with_usage(usage)
    }

    /// Attaches the usage text of the offending command.
    pub fn with_usage(self, usage: impl Into<String>) -> Self {
        Self {
            usage: Some(usage.into()),
            ..self
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(usage) = &self.usage {
            write!(f, "\n{}", usage)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
