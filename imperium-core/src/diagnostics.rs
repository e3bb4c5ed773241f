//! Structured decode advisories.
//!
//! The codec recovers from several kinds of malformed input by assuming a
//! default or dropping excess text. Those recoveries are reported as
//! [`Advisory`] values carried alongside the decoded result in a
//! [`Decoded`] — a side channel, never an error and never console output.
//!
//! ```
//! use imperium_core::{Advisory, Millennium};
//!
//! let decoded = Millennium::from_code("").unwrap();
//! assert_eq!(decoded.value().count(), 41);
//! assert_eq!(
//!     decoded.advisories(),
//!     &[Advisory::BlankMillenniumCode { assumed_count: 41 }]
//! );
//! ```

use std::fmt;

/// A recoverable oddity noticed while decoding a code form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advisory {
    /// The millennium code was empty; the default count was assumed.
    BlankMillenniumCode { assumed_count: i64 },

    /// The millennium code had a prefix but no count digits after it.
    MissingMillenniumCount { assumed_count: i64 },

    /// The millennium code did not start with the defined prefix.
    MillenniumPrefixMismatch { expected: char, found: char },

    /// A composite date code had more parts than the limit; excess parts
    /// were dropped from the start.
    ExcessCodeParts { found: usize, limit: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::BlankMillenniumCode { assumed_count } => write!(
                f,
                "The millennium code is blank, so the count is taken to be {}",
                assumed_count
            ),
            Advisory::MissingMillenniumCount { assumed_count } => write!(
                f,
                "There is no count part in the millennium code, so the count is taken to be {}",
                assumed_count
            ),
            Advisory::MillenniumPrefixMismatch { expected, found } => write!(
                f,
                "The millennium code starts with \"{}\" but the defined prefix is \"{}\"",
                found, expected
            ),
            Advisory::ExcessCodeParts { found, limit } => write!(
                f,
                "The date code has {} parts, more than the limit of {}, so excess parts are dropped from the start",
                found, limit
            ),
        }
    }
}

/// A decoded value paired with the advisories raised while decoding it.
///
/// Only decode entry points that can warn return this; decoders that can
/// only succeed or fail return plain results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoded<T> {
    value: T,
    advisories: Vec<Advisory>,
}

impl<T> Decoded<T> {
    /// Wraps a value decoded without advisories.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            advisories: Vec::new(),
        }
    }

    /// Wraps a value together with the advisories raised while decoding it.
    pub fn with_advisories(value: T, advisories: Vec<Advisory>) -> Self {
        Self { value, advisories }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Returns `true` if decoding raised no advisories.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Discards the advisories and returns the decoded value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Splits into the decoded value and its advisories.
    pub fn into_parts(self) -> (T, Vec<Advisory>) {
        (self.value, self.advisories)
    }
}
