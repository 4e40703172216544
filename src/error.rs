//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`] and are
//! wrapped by [`BookError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::Record`] and [`crate::AddressBook`] operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A name, phone or birthday failed its format rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone being edited is not on the record
    #[error("Phone {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    /// No record with this name exists
    #[error("Contact not found: {0}")]
    RecordNotFound(String),

    /// Malformed argument, such as a zero page size
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Persisting or loading the book failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur while saving or loading the book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the storage file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored document could not be encoded or decoded
    #[error("Storage format error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored document has a schema version this build cannot read
    #[error("Unsupported storage version: {0}")]
    UnsupportedVersion(u32),

    /// The temporary file could not be moved over the target
    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced by the interactive front-end.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command was recognised but its arguments were wrong
    #[error("Usage: {0}")]
    Usage(String),

    /// The first word is not a known command
    #[error("Unknown command: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
