//! Command parsing and dispatch for the clinic address book.
//!
//! Parsing turns a line of input into a [`Command`] without touching the
//! model, so every parser can be unit tested on its own. Execution runs the
//! command against a [`crate::model::Model`].

pub mod definitions;
pub mod handlers;
pub mod output;
pub mod parser_util;
pub mod router;
pub mod syntax;
pub mod tokenizer;

pub use definitions::{CommandCategory, CommandDef, COMMANDS};
pub use handlers::{CommandError, ExecutableCommand, Index};
pub use output::{CommandResult, ControlAction};
pub use router::{Command, CommandRouter};
pub use tokenizer::ParseError;
