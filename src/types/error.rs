//! Error types for the authorizer
//!
//! This module defines all error types that can occur while reading input,
//! parsing records and writing output. Business rule rejections are not
//! errors; they are recorded as violations on the timeline.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, broken pipe, etc.
//! - **Record Errors**: Invalid JSON, missing or conflicting payloads, negative amounts
//! - **Output Errors**: Outcome serialization failures
//! - **Runtime Errors**: Async runtime could not be created

use thiserror::Error;

/// Main error type for the authorizer
///
/// Record-level variants carry the input line number when it is known so
/// the log points at the offending line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthorizerError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The line is not a valid JSON record
    ///
    /// This is a recoverable error - the line is skipped.
    #[error("JSON parse error{}: {message}", line_suffix(*line))]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Description of the parsing error
        message: String,
    },

    /// The record carries neither or both of the account and transaction payloads
    ///
    /// This is a recoverable error - the line is skipped.
    #[error("Malformed record{}: {reason}", line_suffix(*line))]
    MalformedRecord {
        /// Line number of the record (if available)
        line: Option<usize>,
        /// Why the record was rejected
        reason: String,
    },

    /// Transaction amount is negative
    ///
    /// This is a recoverable error - the line is skipped.
    #[error("Invalid amount {amount}{}", line_suffix(*line))]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
        /// Line number of the record (if available)
        line: Option<usize>,
    },

    /// An outcome could not be serialized
    #[error("Serialization error: {message}")]
    SerializeError {
        /// Description of the serialization error
        message: String,
    },

    /// The async runtime could not be created
    #[error("Runtime error: {message}")]
    RuntimeError {
        /// Description of the runtime error
        message: String,
    },
}

fn line_suffix(line: Option<usize>) -> String {
    line.map(|l| format!(" at line {}", l)).unwrap_or_default()
}

// Conversion from io::Error to AuthorizerError
impl From<std::io::Error> for AuthorizerError {
    fn from(error: std::io::Error) -> Self {
        AuthorizerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to AuthorizerError
impl From<serde_json::Error> for AuthorizerError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            AuthorizerError::IoError {
                message: error.to_string(),
            }
        } else {
            AuthorizerError::ParseError {
                line: None,
                message: error.to_string(),
            }
        }
    }
}

// Helper functions for creating common errors

impl AuthorizerError {
    /// Create a MalformedRecord error
    pub fn malformed_record(reason: &str) -> Self {
        AuthorizerError::MalformedRecord {
            line: None,
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: i64) -> Self {
        AuthorizerError::InvalidAmount { amount, line: None }
    }

    /// Create a SerializeError error
    pub fn serialize(message: impl ToString) -> Self {
        AuthorizerError::SerializeError {
            message: message.to_string(),
        }
    }

    /// Attach an input line number to a record-level error
    ///
    /// Errors that are not tied to a record are returned unchanged.
    pub fn at_line(self, line_num: usize) -> Self {
        match self {
            AuthorizerError::ParseError { message, .. } => AuthorizerError::ParseError {
                line: Some(line_num),
                message,
            },
            AuthorizerError::MalformedRecord { reason, .. } => AuthorizerError::MalformedRecord {
                line: Some(line_num),
                reason,
            },
            AuthorizerError::InvalidAmount { amount, .. } => AuthorizerError::InvalidAmount {
                amount,
                line: Some(line_num),
            },
            other => other,
        }
    }
}
