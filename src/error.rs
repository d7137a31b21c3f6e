//! Error types for the contact assistant.
//!
//! Each layer has its own `thiserror` enum. Command handlers collect them into
//! [`CommandError`], which is translated to a user-facing message in exactly
//! one place (`commands::input_error`).

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by operations on a single contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A name or phone failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is not on the record
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),
}

/// Errors raised by the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Keyed lookup of a name that is not in the book
    #[error("Missing key: {0}")]
    MissingKey(String),

    /// Deletion of a name that is not in the book
    #[error("Record with name {0} not found.")]
    RecordNotFound(String),
}

/// Errors that a command handler can return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for the command
    #[error("{command} expects {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// A name or phone failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to change is not on the record
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),

    /// Lookup or removal of a contact that does not exist
    #[error("Missing key: {0}")]
    MissingKey(String),
}

impl From<RecordError> for CommandError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Validation(e) => CommandError::Validation(e),
            RecordError::PhoneNotFound(phone) => CommandError::PhoneNotFound(phone),
        }
    }
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::MissingKey(name) | BookError::RecordNotFound(name) => {
                CommandError::MissingKey(name)
            }
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
