//! Error types for the core crate.
//!
//! Convention and frequency failures carry the offending name so the caller
//! can render a precise message without re-deriving context.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for dates, conventions and frequencies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A day-count or business-day convention name that is not supported.
    #[error("Unsupported convention: {name}")]
    UnsupportedConvention {
        /// The convention name as supplied.
        name: String,
    },

    /// A coupon or principal frequency name that is not supported.
    #[error("Unsupported frequency: {name}")]
    UnsupportedFrequency {
        /// The frequency name as supplied.
        name: String,
    },

    /// A currency code that is not three ASCII letters.
    #[error("Invalid currency code: {code}")]
    InvalidCurrency {
        /// The code as supplied.
        code: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported convention error.
    #[must_use]
    pub fn unsupported_convention(name: impl Into<String>) -> Self {
        Self::UnsupportedConvention { name: name.into() }
    }

    /// Creates an unsupported frequency error.
    #[must_use]
    pub fn unsupported_frequency(name: impl Into<String>) -> Self {
        Self::UnsupportedFrequency { name: name.into() }
    }

    /// Creates an invalid currency error.
    #[must_use]
    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_unsupported_convention_names_input() {
        let err = CoreError::unsupported_convention("ACT/ACT");
        assert_eq!(err.to_string(), "Unsupported convention: ACT/ACT");
    }

    #[test]
    fn test_unsupported_frequency_names_input() {
        let err = CoreError::unsupported_frequency("Weekly");
        assert!(err.to_string().contains("Weekly"));
    }
}
