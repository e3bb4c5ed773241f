//! Decomposition of a duration into a date.
//!
//! The counterpart of [`ImperialDate::duration`]: a total duration in
//! seconds from the calendar epoch divides into whole millennia, then whole
//! years of the remainder, then year fractions of what is left.
//!
//! Decomposition is total: it always produces a year and a year fraction,
//! even when the duration came from a date that carried neither, so it does
//! not round-trip the *absence* of elements. The millennium and year counts
//! come back exactly; the fraction can land one unit off at a bucket edge.

use crate::date::ImperialDate;
use imperium_core::constants::{BASE_YEAR_MAX, MILLENNIUM_SECONDS};
use imperium_core::{Millennium, Year, YearFraction};

/// Scale of the five-decimal rounding applied to the year count.
const YEAR_COUNT_ROUNDING: f64 = 1e5;

impl ImperialDate {
    /// Creates a date from a duration in seconds from the calendar epoch.
    ///
    /// # Example
    ///
    /// ```
    /// use imperium_calendar::ImperialDate;
    ///
    /// let date = ImperialDate::from_numbers(41, Some(636), Some(996), None);
    /// let round_trip = ImperialDate::from_duration(date.duration());
    /// assert_eq!(round_trip.millennium().count(), 41);
    /// assert_eq!(round_trip.year().unwrap().count(), 636);
    /// assert_eq!(round_trip.year_fraction().unwrap().count(), 996);
    /// ```
    pub fn from_duration(seconds: f64) -> Self {
        // Millennia first; the remainder divides into years, and the
        // remainder of those into year fractions.
        let millennia = seconds / MILLENNIUM_SECONDS;
        let whole_millennia = millennia.floor();

        // Rounding to five decimals here keeps accumulated float error from
        // shifting the result into the neighbouring year-fraction bucket.
        let years = ((millennia - whole_millennia) * BASE_YEAR_MAX as f64 * YEAR_COUNT_ROUNDING)
            .round()
            / YEAR_COUNT_ROUNDING;
        let whole_years = years.floor();

        let year_fractions = (years - whole_years) * BASE_YEAR_MAX as f64;

        Self::from_elements(
            Millennium::from_value(whole_millennia as i64),
            Some(Year::from_value(whole_years as i64)),
            Some(YearFraction::from_value(year_fractions as i64)),
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imperium_core::constants::{GREGORIAN_YEAR_SECONDS, YEAR_FRACTION_SECONDS};

    #[test]
    fn test_zero_duration() {
        let date = ImperialDate::from_duration(0.0);
        assert_eq!(date.millennium().count(), 1);
        assert_eq!(date.year().unwrap().count(), 1);
        assert_eq!(date.year_fraction().unwrap().count(), 1);
    }

    #[test]
    fn test_whole_millennia() {
        let date = ImperialDate::from_duration(40.0 * MILLENNIUM_SECONDS);
        assert_eq!(date.millennium().count(), 41);
        assert_eq!(date.year().unwrap().count(), 1);
        assert_eq!(date.year_fraction().unwrap().count(), 1);
    }

    #[test]
    fn test_years_within_millennium() {
        let seconds = 40.0 * MILLENNIUM_SECONDS + 635.0 * GREGORIAN_YEAR_SECONDS;
        let date = ImperialDate::from_duration(seconds);
        assert_eq!(date.millennium().count(), 41);
        assert_eq!(date.year().unwrap().count(), 636);
    }

    #[test]
    fn test_round_trip_with_all_elements() {
        let original = ImperialDate::from_numbers(41, Some(636), Some(996), None);
        let round_trip = ImperialDate::from_duration(original.duration());
        assert_eq!(round_trip.millennium(), original.millennium());
        assert_eq!(round_trip.year(), original.year());
        assert_eq!(round_trip.year_fraction(), original.year_fraction());
    }

    #[test]
    fn test_round_trip_across_counts() {
        for (millennium, year, fraction) in [(1, 1, 1), (2, 970, 1), (41, 999, 1_000)] {
            let original =
                ImperialDate::from_numbers(millennium, Some(year), Some(fraction), None);
            let round_trip = ImperialDate::from_duration(original.duration());
            assert_eq!(
                round_trip.millennium().count(),
                millennium,
                "millennium for {}.{}.{}",
                millennium,
                year,
                fraction
            );
            assert_eq!(round_trip.year().unwrap().count(), year);
            assert_eq!(round_trip.year_fraction().unwrap().count(), fraction);
        }
    }

    #[test]
    fn test_fraction_may_drift_one_unit() {
        // Float error in the final division step can move the fraction by a
        // single unit; the millennium and year never move.
        let original = ImperialDate::from_numbers(31, Some(123), Some(500), None);
        let round_trip = ImperialDate::from_duration(original.duration());
        assert_eq!(round_trip.millennium().count(), 31);
        assert_eq!(round_trip.year().unwrap().count(), 123);
        let drift = round_trip.year_fraction().unwrap().count() - 500;
        assert!(drift.abs() <= 1, "fraction drifted by {}", drift);
    }

    #[test]
    fn test_decomposition_is_total() {
        // A millennium-only date still decomposes into all three elements.
        let original = ImperialDate::from_numbers(35, None, None, None);
        let decomposed = ImperialDate::from_duration(original.duration());
        assert_eq!(decomposed.millennium().count(), 35);
        assert!(decomposed.year().is_some());
        assert!(decomposed.year_fraction().is_some());
    }

    #[test]
    fn test_fraction_boundary_does_not_drift() {
        // An exact fraction boundary must not land in the bucket below it.
        let seconds = 40.0 * MILLENNIUM_SECONDS
            + 100.0 * GREGORIAN_YEAR_SECONDS
            + 250.0 * YEAR_FRACTION_SECONDS;
        let date = ImperialDate::from_duration(seconds);
        assert_eq!(date.year().unwrap().count(), 101);
        assert_eq!(date.year_fraction().unwrap().count(), 251);
    }
}
