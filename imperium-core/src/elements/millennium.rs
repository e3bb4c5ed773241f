//! The millennium element.
//!
//! The millennium is the most significant, and only mandatory, element of an
//! imperial date. Its count is the current millennium (41 for the years
//! 40001 to 41000) and its code form is the count behind an `M` prefix,
//! as in `M41`.
//!
//! # Usage
//!
//! ```
//! use imperium_core::Millennium;
//!
//! let millennium = Millennium::from_count(41);
//! assert_eq!(millennium.code(), "M41");
//!
//! // Decoding tolerates a missing count or a wrong prefix, reporting an
//! // advisory instead of failing.
//! let decoded = Millennium::from_code("m31").unwrap();
//! assert_eq!(decoded.value().count(), 31);
//! assert!(!decoded.is_clean());
//! ```

use crate::constants::{
    DEFAULT_MILLENNIUM_COUNT, MILLENNIUM_MIN, MILLENNIUM_PREFIX, MILLENNIUM_SECONDS,
};
use crate::diagnostics::{Advisory, Decoded};
use crate::elements::common::parse_count;
use crate::errors::ImperiumResult;
use crate::utils::clamp_i64;
use std::fmt;
use std::str::FromStr;

/// The millennium part of an imperial date.
///
/// Stores the 1-based count; the 0-based value and the duration in seconds
/// are derived views. Counts below 1 clamp to 1; there is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millennium {
    count: i64,
}

impl Millennium {
    /// Creates a millennium from its 1-based count, clamping below 1.
    pub fn from_count(count: i64) -> Self {
        Self {
            count: clamp_i64(count, Some(MILLENNIUM_MIN), None),
        }
    }

    /// Creates a millennium from its 0-based value (`count - 1`).
    pub fn from_value(value: i64) -> Self {
        Self::from_count(value + 1)
    }

    /// Creates a millennium from a duration in seconds, flooring to whole
    /// millennium units.
    pub fn from_duration(seconds: f64) -> Self {
        Self::from_value((seconds / MILLENNIUM_SECONDS).floor() as i64)
    }

    /// Decodes a code form such as `M41`.
    ///
    /// A blank code or a code with no digits after the prefix falls back to
    /// the default count of 41 with an advisory; a wrong prefix character is
    /// reported but the remainder is still read as the count.
    pub fn from_code(code: &str) -> ImperiumResult<Decoded<Self>> {
        let mut advisories = Vec::new();

        let Some(prefix) = code.chars().next() else {
            advisories.push(Advisory::BlankMillenniumCode {
                assumed_count: DEFAULT_MILLENNIUM_COUNT,
            });
            return Ok(Decoded::with_advisories(Self::default(), advisories));
        };

        if prefix != MILLENNIUM_PREFIX {
            advisories.push(Advisory::MillenniumPrefixMismatch {
                expected: MILLENNIUM_PREFIX,
                found: prefix,
            });
        }

        let rest = &code[prefix.len_utf8()..];
        let count = if rest.is_empty() {
            advisories.push(Advisory::MissingMillenniumCount {
                assumed_count: DEFAULT_MILLENNIUM_COUNT,
            });
            DEFAULT_MILLENNIUM_COUNT
        } else {
            parse_count("millennium", rest)?
        };

        Ok(Decoded::with_advisories(Self::from_count(count), advisories))
    }

    /// The 1-based count, as written in the code form.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// The 0-based value used in arithmetic.
    pub fn value(&self) -> i64 {
        self.count - 1
    }

    /// Seconds from the calendar epoch to the start of this millennium.
    pub fn duration(&self) -> f64 {
        self.value() as f64 * MILLENNIUM_SECONDS
    }

    /// The code form: the prefix followed by the count, e.g. `M41`.
    pub fn code(&self) -> String {
        format!("{}{}", MILLENNIUM_PREFIX, self.count)
    }
}

impl Default for Millennium {
    /// The 41st millennium, assumed whenever a code omits the count.
    fn default() -> Self {
        Self {
            count: DEFAULT_MILLENNIUM_COUNT,
        }
    }
}

impl fmt::Display for Millennium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Millennium {
    type Err = crate::ImperiumError;

    /// Parses a code form, discarding any advisories.
    fn from_str(s: &str) -> ImperiumResult<Self> {
        Ok(Self::from_code(s)?.into_value())
    }
}
