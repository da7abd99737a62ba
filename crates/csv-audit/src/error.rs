//! Custom error types for the CSV audit pipeline.
//!
//! This module provides the error hierarchy using `thiserror`, together
//! with stable error codes and the process exit code each class maps to.
//!
//! Read-class failures (the file cannot be opened, or its content cannot be
//! parsed as delimited text) exit with code 4. Anything else that escapes
//! the pipeline exits with code 1.

use thiserror::Error;

/// Exit code for read-class failures (unreadable or unparsable input).
pub const EXIT_READ_ERROR: u8 = 4;

/// Exit code for uncategorized failures.
pub const EXIT_FAILURE: u8 = 1;

/// The main error type for the audit pipeline.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The input file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be parsed as delimited text.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The input has no header line at all.
    #[error("empty input: '{0}' contains no columns to parse")]
    EmptyInput(String),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuditError {
    /// Get a stable error code for diagnostics and scripting.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::Csv(_) => "CSV_PARSE_ERROR",
            Self::EmptyInput(_) => "EMPTY_INPUT",
            Self::Json(_) => "JSON_ERROR",
        }
    }

    /// The process exit code for this error.
    ///
    /// IO, parse, and empty-input failures all classify as read errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) | Self::Csv(_) | Self::EmptyInput(_) => EXIT_READ_ERROR,
            Self::Json(_) => EXIT_FAILURE,
        }
    }

    /// Check if this error is a read-class failure.
    pub fn is_read_error(&self) -> bool {
        self.exit_code() == EXIT_READ_ERROR
    }
}

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
