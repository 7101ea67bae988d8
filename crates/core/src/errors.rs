//! Core error types for the TaskBalance application.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! failures (filesystem, encoding) are converted to these types by the
//! storage layer.

use std::num::ParseFloatError;
use thiserror::Error;

use crate::fx::FxError;
use crate::goals::GoalError;
use crate::household::HouseholdError;
use crate::transactions::TransactionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the accounting core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Goal error: {0}")]
    Goal(#[from] GoalError),

    #[error("Household error: {0}")]
    Household(#[from] HouseholdError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
///
/// All details are carried as `String`, allowing the storage layer to
/// convert its own error types into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read a stored document.
    #[error("Failed to read from storage: {0}")]
    ReadFailed(String),

    /// Failed to write a stored document.
    #[error("Failed to write to storage: {0}")]
    WriteFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A stored document could not be encoded or decoded.
    #[error("Failed to serialize stored data: {0}")]
    Serialization(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] chrono::ParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
