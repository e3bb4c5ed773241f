//! The Imperial Dating System of the Imperium of Man.
//!
//! An imperial date names a point in time with up to four elements, written
//! most significant last: an optional check number, an optional year
//! fraction, an optional year, and a mandatory millennium. The date often
//! quoted as the "present" of the setting is `999.M41` — the 999th year of
//! the 41st millennium.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`date`] | The composite [`ImperialDate`] and its code form |
//! | [`parsing`] | Decoding composite codes, including part disambiguation |
//! | [`duration`] | Decomposing a duration in seconds into a date |
//! | [`conversions`] | Bidirectional Gregorian conversion |
//! | [`constants`] | Codec and conversion constants |
//!
//! # Usage
//!
//! ```
//! use imperium_calendar::{ImperialDate, ToGregorian};
//!
//! // Decode a full code: check number 3, fraction 996, year 636, M41.
//! let decoded = ImperialDate::from_code("3.996.636.M41").unwrap();
//! let date = decoded.into_value();
//! assert_eq!(date.code(), "3.996.636.M41");
//!
//! // Convert to the Gregorian calendar.
//! let gregorian = date.to_gregorian().unwrap();
//! assert_eq!(gregorian.year(), 40_636);
//! ```
//!
//! Malformed-but-recoverable input decodes with [`Advisory`] warnings
//! rather than failing; only text that cannot be read as numbers at all is
//! an error:
//!
//! ```
//! use imperium_calendar::ImperialDate;
//!
//! let decoded = ImperialDate::from_code("5.123.m31").unwrap();
//! assert!(!decoded.is_clean()); // lowercase prefix reported
//! assert_eq!(decoded.value().code(), "5.123.M31");
//!
//! assert!(ImperialDate::from_code("5.abc.M31").is_err());
//! ```

use std::fmt;

use imperium_core::ImperiumError;

pub mod constants;
pub mod conversions;
pub mod date;
pub mod duration;
pub mod parsing;

pub use conversions::{
    gregorian_to_imperial, imperial_to_gregorian, GregorianDate, ToGregorian, ToImperial,
};
pub use date::ImperialDate;
pub use parsing::parse_date_code;

pub use imperium_core::{Advisory, CheckNumber, Decoded, Millennium, Year, YearFraction};

pub type DateResult<T> = Result<T, DateError>;

/// Error type of the calendar engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateError {
    /// Code text that cannot be decoded.
    InvalidCode(String),
    /// A Gregorian conversion that cannot be performed.
    ConversionError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidCode(msg) => write!(f, "Invalid code: {}", msg),
            DateError::ConversionError(msg) => write!(f, "Conversion error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

impl From<ImperiumError> for DateError {
    fn from(err: ImperiumError) -> Self {
        match err {
            ImperiumError::InvalidCode { .. } => DateError::InvalidCode(err.to_string()),
            ImperiumError::ConversionError { .. } => DateError::ConversionError(err.to_string()),
        }
    }
}
