//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: Malformed `Major.Minor` arguments
//! - ControlError: Issues reading or parsing the control file
//! - PatternError: Version strings that are not valid match patterns

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version argument errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Control file related errors
    #[error(transparent)]
    Control(#[from] ControlError),

    /// Match pattern errors
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Errors related to version arguments
#[derive(Error, Debug)]
pub enum VersionError {
    /// Version string does not split into exactly two components
    #[error("invalid version '{value}': expected <major>.<minor> with exactly one period, found {periods}")]
    Invalid { value: String, periods: usize },
}

/// Errors related to the control file
#[derive(Error, Debug)]
pub enum ControlError {
    /// Control file not found
    #[error("control file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read control file
    #[error("failed to read control file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content that is not a sequence of deb822 paragraphs
    #[error("failed to parse control file: {message}")]
    ParseError { message: String },

    /// No paragraphs at all
    #[error("control file contains no paragraphs")]
    Empty,

    /// Required field absent from a paragraph
    #[error("paragraph {paragraph} has no '{field}' field")]
    MissingField { paragraph: usize, field: String },
}

/// Errors related to legacy pattern matching
#[derive(Error, Debug)]
pub enum PatternError {
    /// Version string could not be compiled as a pattern
    #[error("'{pattern}' is not a valid match pattern (try --literal): {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl VersionError {
    /// Creates a new Invalid error
    pub fn invalid(value: impl Into<String>) -> Self {
        let value = value.into();
        let periods = value.matches('.').count();
        VersionError::Invalid { value, periods }
    }
}

impl ControlError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ControlError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ControlError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(message: impl Into<String>) -> Self {
        ControlError::ParseError {
            message: message.into(),
        }
    }

    /// Creates a new MissingField error
    pub fn missing_field(paragraph: usize, field: impl Into<String>) -> Self {
        ControlError::MissingField {
            paragraph,
            field: field.into(),
        }
    }
}
