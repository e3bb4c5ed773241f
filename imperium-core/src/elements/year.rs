//! The year and year-fraction elements.
//!
//! Both elements count from 1 to 1000 within their parent (years within a
//! millennium, fractions within a year) and share the three-digit code
//! convention where 1 is written `001` and 1000 is written `000`. They
//! differ only in the duration a single unit represents.

use crate::constants::{BASE_YEAR_MAX, BASE_YEAR_MIN, GREGORIAN_YEAR_SECONDS, YEAR_FRACTION_SECONDS};
use crate::elements::common::{decode_base_year, encode_base_year};
use crate::errors::ImperiumResult;
use crate::utils::clamp_i64;
use std::fmt;
use std::str::FromStr;

fn clamp_base_year(count: i64) -> i64 {
    clamp_i64(count, Some(BASE_YEAR_MIN), Some(BASE_YEAR_MAX))
}

/// The year part of an imperial date, counting 1..=1000 within a millennium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Year {
    count: i64,
}

impl Year {
    /// Creates a year from its 1-based count, clamping into 1..=1000.
    pub fn from_count(count: i64) -> Self {
        Self {
            count: clamp_base_year(count),
        }
    }

    /// Creates a year from its 0-based value (`count - 1`).
    pub fn from_value(value: i64) -> Self {
        Self::from_count(value + 1)
    }

    /// Creates a year from a duration in seconds, flooring to whole years.
    pub fn from_duration(seconds: f64) -> Self {
        Self::from_value((seconds / GREGORIAN_YEAR_SECONDS).floor() as i64)
    }

    /// Decodes a three-digit code form; `000` reads as 1000.
    pub fn from_code(code: &str) -> ImperiumResult<Self> {
        Ok(Self::from_count(decode_base_year("year", code)?))
    }

    /// The 1-based count, as written in the code form.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// The 0-based value used in arithmetic.
    pub fn value(&self) -> i64 {
        self.count - 1
    }

    /// Seconds from the start of the millennium to the start of this year.
    pub fn duration(&self) -> f64 {
        self.value() as f64 * GREGORIAN_YEAR_SECONDS
    }

    /// The three-digit code form; 1000 encodes as `000`.
    pub fn code(&self) -> String {
        encode_base_year(self.count)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Year {
    type Err = crate::ImperiumError;

    fn from_str(s: &str) -> ImperiumResult<Self> {
        Self::from_code(s)
    }
}

/// The year-fraction part of an imperial date.
///
/// A year is divided into a thousand even fractions numbered 1..=1000; each
/// fraction spans a little under nine hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearFraction {
    count: i64,
}

impl YearFraction {
    /// Creates a year fraction from its 1-based count, clamping into 1..=1000.
    pub fn from_count(count: i64) -> Self {
        Self {
            count: clamp_base_year(count),
        }
    }

    /// Creates a year fraction from its 0-based value (`count - 1`).
    pub fn from_value(value: i64) -> Self {
        Self::from_count(value + 1)
    }

    /// Creates a year fraction from a duration in seconds, flooring to whole
    /// fraction units.
    pub fn from_duration(seconds: f64) -> Self {
        Self::from_value((seconds / YEAR_FRACTION_SECONDS).floor() as i64)
    }

    /// Decodes a three-digit code form; `000` reads as 1000.
    pub fn from_code(code: &str) -> ImperiumResult<Self> {
        Ok(Self::from_count(decode_base_year("year fraction", code)?))
    }

    /// The 1-based count, as written in the code form.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// The 0-based value used in arithmetic.
    pub fn value(&self) -> i64 {
        self.count - 1
    }

    /// Seconds from the start of the year to the start of this fraction.
    pub fn duration(&self) -> f64 {
        self.value() as f64 * YEAR_FRACTION_SECONDS
    }

    /// The three-digit code form; 1000 encodes as `000`.
    pub fn code(&self) -> String {
        encode_base_year(self.count)
    }
}

impl fmt::Display for YearFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for YearFraction {
    type Err = crate::ImperiumError;

    fn from_str(s: &str) -> ImperiumResult<Self> {
        Self::from_code(s)
    }
}
