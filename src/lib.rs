//! # Census Analyser - validated census data loading
//!
//! Loads delimited state census tables into keyed, in-memory collections.
//!
//! Census Analyser provides:
//! - A closed set of supported schemas (`Country`) with their expected headers
//! - Structural validation of candidate files (existence, type, header, delimiter)
//! - Pluggable per-schema adapters that normalize rows into one record type
//! - An all-or-nothing loader returning a `RecordCollection` keyed by state

pub mod country;
pub mod schema;
pub mod record;
pub mod source;
pub mod validator;
pub mod adapter;
pub mod loader;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use country::Country;
pub use schema::SchemaDescriptor;
pub use record::{CensusData, CensusRecord, RecordCollection};
pub use source::{FileSource, MemorySource, RecordSource, SourceLine};
pub use validator::Validator;
pub use loader::{load_census_data, CensusLoader, LoadPhase};

use std::path::PathBuf;

/// Result type alias for Census Analyser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Census Analyser operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid file type: {} (expected .{expected})", path.display())]
    InvalidFileType { path: PathBuf, expected: String },

    #[error("Incorrect header: expected `{expected}`, found `{found}`")]
    IncorrectHeader { expected: String, found: String },

    #[error(
        "Incorrect delimiter at line {line}: expected {expected_fields} fields separated by '{delimiter}', found {found_fields}"
    )]
    IncorrectDelimiter {
        line: usize,
        delimiter: char,
        expected_fields: usize,
        found_fields: usize,
    },

    #[error("Invalid value `{value}` for column `{column}` at line {line}")]
    InvalidField {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Unknown schema: {0}")]
    UnknownSchema(String),

    #[error("No adapter registered for schema: {0}")]
    AdapterNotRegistered(Country),
}

/// Coarse classification of an [`Error`], for callers that branch on the
/// failure kind rather than its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileNotFound,
    InvalidFileType,
    IncorrectHeader,
    IncorrectDelimiter,
    InvalidField,
    UnknownSchema,
    AdapterNotRegistered,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::FileNotFound => "FILE_NOT_FOUND",
            ErrorKind::InvalidFileType => "INVALID_FILE_TYPE",
            ErrorKind::IncorrectHeader => "INCORRECT_HEADER",
            ErrorKind::IncorrectDelimiter => "INCORRECT_DELIMITER",
            ErrorKind::InvalidField => "INVALID_FIELD",
            ErrorKind::UnknownSchema => "UNKNOWN_SCHEMA",
            ErrorKind::AdapterNotRegistered => "ADAPTER_NOT_REGISTERED",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Error {
    /// The kind of failure, independent of its payload
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound { .. } => ErrorKind::FileNotFound,
            Error::InvalidFileType { .. } => ErrorKind::InvalidFileType,
            Error::IncorrectHeader { .. } => ErrorKind::IncorrectHeader,
            Error::IncorrectDelimiter { .. } => ErrorKind::IncorrectDelimiter,
            Error::InvalidField { .. } => ErrorKind::InvalidField,
            Error::UnknownSchema(_) => ErrorKind::UnknownSchema,
            Error::AdapterNotRegistered(_) => ErrorKind::AdapterNotRegistered,
        }
    }

    pub(crate) fn file_not_found(path: impl Into<PathBuf>, source: Option<std::io::Error>) -> Self {
        Error::FileNotFound {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_mapping() {
        let err = Error::file_not_found("missing.csv", None);
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.kind().as_str(), "FILE_NOT_FOUND");

        let err = Error::IncorrectDelimiter {
            line: 3,
            delimiter: ',',
            expected_fields: 4,
            found_fields: 1,
        };
        assert_eq!(err.kind(), ErrorKind::IncorrectDelimiter);
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_file_not_found_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::file_not_found("data.csv", Some(io));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "File not found: data.csv");
    }
}
