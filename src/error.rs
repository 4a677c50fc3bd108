//! Error types for clinic-book.
//!
//! Defines the application-level error enum. Command parsing and execution
//! have their own error types in [`crate::commands`].

use thiserror::Error;

/// Main error type for clinic-book operations.
#[derive(Error, Debug)]
pub enum ClinicError {
    /// Configuration errors (unreadable or invalid config file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage errors (data file unreadable, corrupt or not writable).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClinicError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a storage error with the given message.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Storage(_) => "Storage Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using ClinicError.
pub type Result<T> = std::result::Result<T, ClinicError>;
