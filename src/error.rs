//! Error types for the contact book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Command errors are never fatal: handlers turn them into the message shown to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while running a command against the book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A phone or birthday argument failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record is stored under the requested name
    #[error("Contact not found.")]
    NotFound,

    /// Wrong number of arguments; carries the usage hint
    #[error("{0}")]
    Usage(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
