//! Conversions between imperial and Gregorian dates.
//!
//! The millennium and year of an imperial date map directly onto the
//! Gregorian year; sub-year precision travels through the year fraction,
//! related to hours elapsed in the Gregorian year by the empirical
//! [Makr constant](crate::constants::MAKR_CONSTANT).
//!
//! The mapping is a lossy approximation in both directions — a year
//! fraction spans a little under nine hours, so round trips land within
//! that resolution, not on the exact instant. Dates converted *to* the
//! imperial calendar are accordingly stamped with check number 9
//! ("Approximation") unless the caller opts out.
//!
//! # Usage
//!
//! ```
//! use imperium_calendar::{GregorianDate, ImperialDate, ToGregorian, ToImperial};
//!
//! let date = ImperialDate::from_code("9.001.001.M41").unwrap().into_value();
//! let gregorian = date.to_gregorian().unwrap();
//! assert_eq!(gregorian.to_string(), "40001-01-01T07:00:00");
//!
//! let gregorian = GregorianDate::new(1970, 1, 1, 0).unwrap();
//! let imperial = gregorian.to_imperial().unwrap();
//! assert_eq!(imperial.code(), "9.001.970.M2");
//! ```

pub mod gregorian;
pub mod year_fraction;

pub use gregorian::{gregorian_to_imperial, imperial_to_gregorian, GregorianDate};
pub use year_fraction::{
    days_to_hours, hours_to_days, hours_to_year_fraction, year_fraction_to_hours,
};

use crate::date::ImperialDate;
use crate::DateResult;

/// Conversion to a Gregorian calendar point.
pub trait ToGregorian {
    fn to_gregorian(&self) -> DateResult<GregorianDate>;
}

/// Conversion to an imperial date.
///
/// Converted dates carry the "Approximation" check number; use
/// [`gregorian_to_imperial`] directly to omit it.
pub trait ToImperial {
    fn to_imperial(&self) -> DateResult<ImperialDate>;
}
