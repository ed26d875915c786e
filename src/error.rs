//! Error types for the personal assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced by contact and note operations.
///
/// The command layer converts every variant into a single user-facing line.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// A field value failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No contact with this name
    #[error("Contact '{0}' not found")]
    ContactNotFound(String),

    /// The contact has no phone with this exact value
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// No note at this (1-based) position
    #[error("Note #{0} not found")]
    NoteNotFound(usize),

    /// Field name outside of email/address/birthday
    #[error("Field '{0}' cannot be edited directly")]
    UnsupportedField(String),

    /// Too few tokens for a command
    #[error("Not enough arguments for {command}. Usage: {usage}")]
    InsufficientArguments {
        command: String,
        usage: &'static str,
    },

    /// A token could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Persisting a collection failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while reading or writing JSON files.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// No storage directory was given and the home directory is unknown
    #[error("Cannot determine home directory; set {0}")]
    NoHomeDirectory(String),
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
