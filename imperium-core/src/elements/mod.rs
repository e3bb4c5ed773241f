//! Imperial date elements.
//!
//! Provides the four element value types that make up an imperial date, from
//! most to least significant:
//!
//! | Element | Count range | Code form | Unit (seconds) |
//! |---------|-------------|-----------|----------------|
//! | [`Millennium`] | 1.. | `M` + count, e.g. `M41` | 1000 Gregorian years |
//! | [`Year`] | 1..=1000 | three digits, `001`..`999`, 1000 as `000` | 1 Gregorian year |
//! | [`YearFraction`] | 1..=1000 | same three-digit convention | 1/1000 Gregorian year |
//! | [`CheckNumber`] | index 0..=9 | one digit | — (no duration) |
//!
//! # Usage
//!
//! Each element is constructed from whichever view is at hand — the 1-based
//! count, the 0-based value, a duration in seconds, or a code form:
//!
//! ```
//! use imperium_core::{CheckNumber, Millennium, Year, YearFraction};
//!
//! let millennium = Millennium::from_code("M41").unwrap().into_value();
//! let year = Year::from_code("999").unwrap();
//! let fraction = YearFraction::from_count(500);
//! let check = CheckNumber::from_index(2);
//!
//! assert_eq!(millennium.count(), 41);
//! assert_eq!(year.count(), 999);
//! assert_eq!(fraction.code(), "500");
//! assert_eq!(check.description(), "Direct");
//! ```
//!
//! Counts outside an element's range clamp to the nearest bound; only text
//! that cannot be read as an integer fails to decode.

pub mod check_number;
pub(crate) mod common;
pub mod millennium;
pub mod year;

pub use check_number::CheckNumber;
pub use millennium::Millennium;
pub use year::{Year, YearFraction};
