//! Error types for imperial calendar operations.
//!
//! This module provides the unified error type [`ImperiumError`] covering the
//! failure modes of the calendar engine: malformed code text where digits are
//! required, and conversion failures.
//!
//! Out-of-range numbers are *not* errors anywhere in the calendar — counts and
//! indexes clamp to their element's range. Only text that cannot be read as an
//! integer at all, or a conversion that cannot be performed, produces an error.
//!
//! # Usage
//!
//! Most fallible functions return [`ImperiumResult<T>`], which is
//! `Result<T, ImperiumError>`. Use the constructor methods for consistent
//! error creation:
//!
//! ```
//! use imperium_core::{ImperiumError, ImperiumResult};
//!
//! fn read_count(text: &str) -> ImperiumResult<i64> {
//!     text.parse::<i64>()
//!         .map_err(|_| ImperiumError::invalid_code("year", text, "expected decimal digits"))
//! }
//!
//! assert!(read_count("123").is_ok());
//! assert!(read_count("abc").is_err());
//! ```

use thiserror::Error;

/// Unified error type for imperial calendar operations.
#[derive(Error, Debug)]
pub enum ImperiumError {
    /// Code text that cannot be decoded (non-numeric where digits are required).
    #[error("Invalid {element} code \"{code}\": {message}")]
    InvalidCode {
        element: String,
        code: String,
        message: String,
    },

    /// Calendar conversion failure (invalid Gregorian components, out-of-range input).
    #[error("Conversion error in {context}: {message}")]
    ConversionError { context: String, message: String },
}

/// Convenience alias for `Result<T, ImperiumError>`.
pub type ImperiumResult<T> = Result<T, ImperiumError>;

impl ImperiumError {
    /// Creates an [`InvalidCode`](Self::InvalidCode) error.
    pub fn invalid_code(element: &str, code: &str, reason: &str) -> Self {
        Self::InvalidCode {
            element: element.to_string(),
            code: code.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`ConversionError`](Self::ConversionError).
    pub fn conversion_error(context: &str, reason: &str) -> Self {
        Self::ConversionError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` if correcting the input might succeed.
    ///
    /// [`InvalidCode`](Self::InvalidCode) is recoverable (the caller can fix
    /// the code text and retry); conversion failures are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidCode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_error() {
        let err = ImperiumError::invalid_code("millennium", "Mxx", "expected decimal digits");
        assert_eq!(
            err.to_string(),
            "Invalid millennium code \"Mxx\": expected decimal digits"
        );
    }

    #[test]
    fn test_conversion_error() {
        let err = ImperiumError::conversion_error("gregorian date", "month out of range");
        assert!(err
            .to_string()
            .contains("Conversion error in gregorian date"));
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(ImperiumError::invalid_code("year", "abc", "bad digits").is_recoverable());
        assert!(!ImperiumError::conversion_error("date", "bad month").is_recoverable());
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<ImperiumError>();
        _assert_sync::<ImperiumError>();
    }
}
