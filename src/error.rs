//! Error types for the phonebook.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while reading or writing the backing file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not follow the expected tabular layout
    #[error("Malformed contacts file at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// A row decoded into a value that fails domain validation
    #[error("Invalid contact at line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

impl From<csv::Error> for StorageError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, |pos| pos.line() as usize);
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => StorageError::Io(source),
            _ => StorageError::Format { line, reason },
        }
    }
}

/// Errors raised by directory-level operations.
///
/// Callers are expected to check existence through the lookup service first,
/// so these indicate a caller bug rather than a user mistake.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    /// No contact is stored under this name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Another contact already holds this name
    #[error("Contact already exists: {0}")]
    AlreadyExists(String),
}

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Fewer positional arguments than the command needs
    #[error("Insufficient arguments")]
    InsufficientArguments,

    /// An argument failed value validation
    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// Loading or saving the directory failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A directory operation was called in a state the handler should have ruled out
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl CommandError {
    /// Whether this error comes from bad user input rather than a fault.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::InsufficientArguments | Self::Validation(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
