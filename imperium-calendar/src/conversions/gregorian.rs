//! The Gregorian side of the conversion.
//!
//! [`GregorianDate`] is a calendar point at hour precision — the finest
//! granularity the year-fraction mapping can express. Converting an
//! imperial date places it at the start of its Gregorian year plus the
//! hour offset of its year fraction; converting back splits the Gregorian
//! year into millennium and year counts and turns the hours elapsed in the
//! year into a fraction.

use super::year_fraction::{hours_to_year_fraction, year_fraction_to_hours};
use super::{ToGregorian, ToImperial};
use crate::date::ImperialDate;
use crate::{DateError, DateResult};
use imperium_core::constants::{HOURS_PER_DAY, YEARS_PER_MILLENNIUM};
use imperium_core::{CheckNumber, Millennium, Year};
use std::fmt;

/// A proleptic Gregorian calendar point at hour precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GregorianDate {
    year: i64,
    month: u8,
    day: u8,
    hour: u8,
}

impl GregorianDate {
    /// Creates a calendar point, validating the month, day, and hour.
    pub fn new(year: i64, month: u8, day: u8, hour: u8) -> DateResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(DateError::ConversionError(format!(
                "Invalid month: {}",
                month
            )));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(DateError::ConversionError(format!(
                "Invalid day {} for {}-{:02}",
                day, year, month
            )));
        }
        if hour > 23 {
            return Err(DateError::ConversionError(format!("Invalid hour: {}", hour)));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
        })
    }

    /// Midnight of the first of January of the given year.
    pub fn year_start(year: i64) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
            hour: 0,
        }
    }

    /// The point a whole number of hours after the start of the given year.
    ///
    /// Large offsets roll across month and year boundaries; an offset near
    /// a full year lands in the following January when the year is common.
    pub fn from_year_start_hours(year: i64, hours: i64) -> Self {
        let mut days = hours.div_euclid(HOURS_PER_DAY);
        let hour = hours.rem_euclid(HOURS_PER_DAY) as u8;

        let mut year = year;
        while days < 0 {
            year -= 1;
            days += days_in_year(year);
        }
        while days >= days_in_year(year) {
            days -= days_in_year(year);
            year += 1;
        }

        let mut month = 1u8;
        loop {
            let len = days_in_month(year, month) as i64;
            if days < len {
                break;
            }
            days -= len;
            month += 1;
        }

        Self {
            year,
            month,
            day: days as u8 + 1,
            hour,
        }
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The 0-based day of the year; the first of January is day 0.
    pub fn day_of_year(&self) -> i64 {
        let mut ordinal = (self.day - 1) as i64;
        for month in 1..self.month {
            ordinal += days_in_month(self.year, month) as i64;
        }
        ordinal
    }

    /// Whole hours elapsed since the start of the year.
    pub fn hours_into_year(&self) -> i64 {
        self.day_of_year() * HOURS_PER_DAY + self.hour as i64
    }
}

impl fmt::Display for GregorianDate {
    /// Formats as ISO 8601 at hour precision (YYYY-MM-DDTHH:00:00).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:00:00",
            self.year, self.month, self.day, self.hour
        )
    }
}

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_year(year: i64) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

fn days_in_month(year: i64, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Converts an imperial date to the equivalent Gregorian point.
///
/// The Gregorian year is the elapsed millennia in years plus the year count
/// (taken as 1 when the year element is absent). A year fraction adds its
/// hour conversion, floored and less one, to the start of that year; with
/// no fraction the point stays at midnight of the first of January.
pub fn imperial_to_gregorian(date: &ImperialDate) -> DateResult<GregorianDate> {
    let year = date.millennium().value() * YEARS_PER_MILLENNIUM
        + date.year().map_or(1, |year| year.count());

    let hours = match date.year_fraction() {
        Some(fraction) => year_fraction_to_hours(fraction) as i64 - 1,
        None => 0,
    };

    Ok(GregorianDate::from_year_start_hours(year, hours))
}

/// Converts a Gregorian point to an imperial date.
///
/// The millennium is the Gregorian year in millennia rounded up; the year
/// is the remainder within that millennium; the hours elapsed in the year
/// become the year fraction. When `make_approximation` is true the result
/// carries check number 9, the convention for dates converted from foreign
/// calendars.
pub fn gregorian_to_imperial(date: &GregorianDate, make_approximation: bool) -> ImperialDate {
    let millennium_count = (date.year() as f64 / YEARS_PER_MILLENNIUM as f64).ceil() as i64;
    let millennium = Millennium::from_count(millennium_count);

    let year = Year::from_count(date.year() - millennium.value() * YEARS_PER_MILLENNIUM);

    let year_fraction = hours_to_year_fraction(date.hours_into_year() as f64);

    let check_number = if make_approximation {
        Some(CheckNumber::approximation())
    } else {
        None
    };

    ImperialDate::from_elements(millennium, Some(year), Some(year_fraction), check_number)
}

impl ToGregorian for ImperialDate {
    fn to_gregorian(&self) -> DateResult<GregorianDate> {
        imperial_to_gregorian(self)
    }
}

impl ToImperial for GregorianDate {
    /// Converts with the "Approximation" check number attached.
    fn to_imperial(&self) -> DateResult<ImperialDate> {
        Ok(gregorian_to_imperial(self, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_components() {
        assert!(GregorianDate::new(2024, 2, 29, 12).is_ok());
        assert!(GregorianDate::new(2023, 2, 29, 12).is_err());
        assert!(GregorianDate::new(2023, 13, 1, 0).is_err());
        assert!(GregorianDate::new(2023, 0, 1, 0).is_err());
        assert!(GregorianDate::new(2023, 1, 0, 0).is_err());
        assert!(GregorianDate::new(2023, 1, 1, 24).is_err());
    }

    #[test]
    fn test_year_start_is_new_years_midnight() {
        assert_eq!(
            GregorianDate::year_start(2025),
            GregorianDate::new(2025, 1, 1, 0).unwrap()
        );
        assert_eq!(GregorianDate::year_start(2025).day_of_year(), 0);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_day_of_year_is_zero_based() {
        let jan_first = GregorianDate::new(2025, 1, 1, 0).unwrap();
        assert_eq!(jan_first.day_of_year(), 0);

        let sep_20 = GregorianDate::new(2025, 9, 20, 12).unwrap();
        assert_eq!(sep_20.day_of_year(), 262);
        assert_eq!(sep_20.hours_into_year(), 6_300);
    }

    #[test]
    fn test_from_year_start_hours_within_year() {
        let date = GregorianDate::from_year_start_hours(40_001, 7);
        assert_eq!(date.to_string(), "40001-01-01T07:00:00");

        let date = GregorianDate::from_year_start_hours(2025, 25);
        assert_eq!(date.to_string(), "2025-01-02T01:00:00");
    }

    #[test]
    fn test_from_year_start_hours_rolls_over_year() {
        // 8764 hours overruns a common year (8760 hours) into January.
        let date = GregorianDate::from_year_start_hours(40_637, 8_764);
        assert_eq!(date.to_string(), "40638-01-01T04:00:00");

        // A leap year absorbs the same offset.
        assert!(is_leap_year(40_636));
        let date = GregorianDate::from_year_start_hours(40_636, 8_764);
        assert_eq!(date.to_string(), "40636-12-31T04:00:00");
    }

    #[test]
    fn test_first_millennium_year_one() {
        let date = ImperialDate::from_numbers(1, Some(1), None, None);
        let gregorian = imperial_to_gregorian(&date).unwrap();
        assert_eq!(gregorian.to_string(), "0001-01-01T00:00:00");
    }

    #[test]
    fn test_millennium_only_assumes_year_one() {
        let date = ImperialDate::from_code("M33").unwrap().into_value();
        let gregorian = date.to_gregorian().unwrap();
        assert_eq!(gregorian.to_string(), "32001-01-01T00:00:00");
    }

    #[test]
    fn test_imperial_to_gregorian_with_fraction() {
        let date = ImperialDate::from_code("3.996.636.M41").unwrap().into_value();
        let gregorian = date.to_gregorian().unwrap();
        assert_eq!(gregorian.to_string(), "40636-12-29T17:00:00");
    }

    #[test]
    fn test_gregorian_to_imperial_unix_epoch() {
        let epoch = GregorianDate::new(1970, 1, 1, 0).unwrap();
        let imperial = gregorian_to_imperial(&epoch, true);
        assert_eq!(imperial.code(), "9.001.970.M2");
        assert_eq!(imperial.check_number().unwrap().description(), "Approximation");

        let imperial = gregorian_to_imperial(&epoch, false);
        assert_eq!(imperial.code(), "001.970.M2");
    }

    #[test]
    fn test_gregorian_to_imperial_modern_date() {
        let date = GregorianDate::new(2025, 9, 20, 12).unwrap();
        let imperial = gregorian_to_imperial(&date, false);
        assert_eq!(imperial.millennium().count(), 3);
        assert_eq!(imperial.year().unwrap().count(), 25);
        assert_eq!(imperial.year_fraction().unwrap().count(), 718);
        assert_eq!(imperial.code(), "718.025.M3");
    }

    #[test]
    fn test_round_trip_is_approximate_within_fraction_resolution() {
        // One year fraction spans just under nine hours, so a round trip
        // must land in the same year and within a day of the original.
        let original = GregorianDate::new(2025, 9, 20, 12).unwrap();
        let imperial = gregorian_to_imperial(&original, false);
        let back = imperial.to_gregorian().unwrap();

        assert_eq!(back.year(), original.year());
        let hours_apart = (back.hours_into_year() - original.hours_into_year()).abs();
        assert!(hours_apart <= 9, "round trip drifted {} hours", hours_apart);
    }

    #[test]
    fn test_trait_and_free_function_agree() {
        let date = ImperialDate::from_numbers(41, Some(1), Some(1), Some(9));
        assert_eq!(
            date.to_gregorian().unwrap(),
            imperial_to_gregorian(&date).unwrap()
        );

        let gregorian = GregorianDate::new(1970, 1, 1, 0).unwrap();
        assert_eq!(
            gregorian.to_imperial().unwrap(),
            gregorian_to_imperial(&gregorian, true)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = GregorianDate::new(40_636, 12, 29, 17).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }
}
