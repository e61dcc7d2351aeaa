//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid currency code.
    #[error("Invalid currency: {0}. Use a three-letter code such as CZK.")]
    InvalidCurrency(String),

    /// No bond matches the ISIN or name.
    #[error("Bond not found: {0}")]
    BondNotFound(String),

    /// Invalid price.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(String),

    /// Configuration error.
    #[error("Configuration error in {path}: {message}")]
    Config {
        /// Config file.
        path: PathBuf,
        /// Description of the problem.
        message: String,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
