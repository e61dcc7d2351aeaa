//! Error types for dataset loading.

use thiserror::Error;

use yieldline_bonds::BondError;
use yieldline_core::CoreError;

/// A specialized Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while loading a dataset.
///
/// Row numbers are file line numbers, the header being line 1.
#[derive(Error, Debug)]
pub enum FileError {
    /// The file could not be opened or read as CSV.
    #[error("Failed to read {path}: {message}")]
    Read {
        /// Path of the file.
        path: String,
        /// Underlying reader error.
        message: String,
    },

    /// A row does not have the expected columns or types.
    #[error("Row {row}: {message}")]
    Parse {
        /// Line number.
        row: usize,
        /// Description of the problem.
        message: String,
    },

    /// A column holds a value the core types reject.
    #[error("Row {row}, column '{column}': {source}")]
    InvalidField {
        /// Line number.
        row: usize,
        /// Column header.
        column: &'static str,
        /// Underlying parse error.
        #[source]
        source: CoreError,
    },

    /// A column holds a number that is not a decimal.
    #[error("Row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        /// Line number.
        row: usize,
        /// Column header.
        column: &'static str,
        /// Offending text.
        value: String,
    },

    /// The row parses but describes an invalid bond.
    #[error("Row {row}: {source}")]
    InvalidTerms {
        /// Line number.
        row: usize,
        /// Validation failure.
        #[source]
        source: BondError,
    },
}

impl FileError {
    /// Creates a read error.
    #[must_use]
    pub fn read(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Read {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(row: usize, message: impl ToString) -> Self {
        Self::Parse {
            row,
            message: message.to_string(),
        }
    }

    /// Creates an invalid field error.
    #[must_use]
    pub fn invalid_field(row: usize, column: &'static str, source: CoreError) -> Self {
        Self::InvalidField {
            row,
            column,
            source,
        }
    }
}
