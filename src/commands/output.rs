//! Transport-agnostic command output types.
//!
//! A command reports what happened as a [`CommandResult`]; the presentation
//! layer (the interactive loop, one-shot mode, tests) decides how to show it.

use crate::model::Appointment;

/// What the presentation layer should show or do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAction {
    /// Only the feedback message.
    None,
    /// The filtered person list may have changed and should be shown.
    ShowPersons,
    /// The given appointments, in order.
    ShowAppointments(Vec<Appointment>),
    /// The generated help text.
    ShowHelp,
    /// Stop reading commands.
    Exit,
}

/// Output from a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    action: ControlAction,
}

impl CommandResult {
    /// A result carrying only a feedback message.
    pub fn new(feedback: impl Into<String>) -> Self {
        Self::with_action(feedback, ControlAction::None)
    }

    pub fn with_action(feedback: impl Into<String>, action: ControlAction) -> Self {
        Self {
            feedback: feedback.into(),
            action,
        }
    }

    /// A result after which the person list should be redisplayed.
    pub fn persons(feedback: impl Into<String>) -> Self {
        Self::with_action(feedback, ControlAction::ShowPersons)
    }

    /// Message shown to the user.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn action(&self) -> &ControlAction {
        &self.action
    }

    pub fn is_exit(&self) -> bool {
        matches!(self.action, ControlAction::Exit)
    }
}
