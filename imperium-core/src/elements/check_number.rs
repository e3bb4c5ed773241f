//! The check number element.
//!
//! A check number records how certain a date is, owing to the vagaries of
//! Warp travel and errors of timekeeping across the Imperium. The index runs
//! from 0 (Earth Standard Date, recorded on Holy Terra) to 9 (a bare
//! approximation); its code form is the single decimal digit of the index.

use crate::elements::common::parse_count;
use crate::errors::ImperiumResult;
use crate::utils::clamp_i64;
use std::fmt;
use std::str::FromStr;

/// Descriptions of the defined check numbers, indexed by check-number index.
pub const CHECK_NUMBER_DESCRIPTIONS: [&str; 10] = [
    "Earth Standard Date (Holy Terra)",
    "Earth Standard Date (Sol)",
    "Direct",
    "Indirect",
    "Corroborated",
    "Sub-Corroborated",
    "Non-Referenced, 1 year",
    "Non-Referenced, 10 years",
    "Non-Referenced, 11+ years",
    "Approximation",
];

/// The check number part of an imperial date.
///
/// Stores an index into [`CHECK_NUMBER_DESCRIPTIONS`]; out-of-range indexes
/// clamp to the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckNumber {
    index: i64,
}

impl CheckNumber {
    /// The lowest defined check-number index.
    pub const MIN_INDEX: i64 = 0;

    /// The highest defined check-number index.
    pub const MAX_INDEX: i64 = CHECK_NUMBER_DESCRIPTIONS.len() as i64 - 1;

    /// Creates a check number from its index, clamping into the defined range.
    pub fn from_index(index: i64) -> Self {
        Self {
            index: clamp_i64(index, Some(Self::MIN_INDEX), Some(Self::MAX_INDEX)),
        }
    }

    /// The check number given to dates converted from foreign calendars.
    pub fn approximation() -> Self {
        Self::from_index(Self::MAX_INDEX)
    }

    /// Decodes a code form: the whole text read as a decimal index, clamped.
    pub fn from_code(code: &str) -> ImperiumResult<Self> {
        Ok(Self::from_index(parse_count("check number", code)?))
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    /// The brief description of this check number's certainty class.
    pub fn description(&self) -> &'static str {
        CHECK_NUMBER_DESCRIPTIONS[self.index as usize]
    }

    /// The code form: the decimal digit of the index.
    pub fn code(&self) -> String {
        self.index.to_string()
    }
}

impl fmt::Display for CheckNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CheckNumber {
    type Err = crate::ImperiumError;

    fn from_str(s: &str) -> ImperiumResult<Self> {
        Self::from_code(s)
    }
}
