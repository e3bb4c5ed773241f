//! Year-fraction conversion via the Makr constant.
//!
//! The Imperial Dating System article relates the year fraction to the hour
//! within a Gregorian year through a single empirical ratio, the "Makr
//! constant": fractions per hour. The worked example in the article, hour
//! 4816 of the year (the 18th of July), lands on fraction 549, which the
//! functions here reproduce.

use crate::constants::MAKR_CONSTANT;
use imperium_core::constants::HOURS_PER_DAY;
use imperium_core::YearFraction;

/// Converts hours elapsed in a Gregorian year to a year fraction.
///
/// The product truncates to a whole count, which then clamps into the
/// fraction's 1..=1000 range, so hour zero maps to fraction 1.
pub fn hours_to_year_fraction(hours: f64) -> YearFraction {
    YearFraction::from_count((hours * MAKR_CONSTANT) as i64)
}

/// Converts a year fraction back to hours elapsed in a Gregorian year.
pub fn year_fraction_to_hours(fraction: YearFraction) -> f64 {
    fraction.count() as f64 / MAKR_CONSTANT
}

pub fn days_to_hours(days: f64) -> f64 {
    days * HOURS_PER_DAY as f64
}

pub fn hours_to_days(hours: f64) -> f64 {
    hours / HOURS_PER_DAY as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fandom_worked_example() {
        // Hour 4816 of the year is the article's 18th-of-July example.
        assert_eq!(hours_to_year_fraction(4_816.0).count(), 549);
    }

    #[test]
    fn test_hour_zero_clamps_to_first_fraction() {
        assert_eq!(hours_to_year_fraction(0.0).count(), 1);
    }

    #[test]
    fn test_fraction_to_hours() {
        let hours = year_fraction_to_hours(YearFraction::from_count(1));
        assert!((hours - 8.765812978750354).abs() < 1e-9);
    }

    #[test]
    fn test_hours_round_trip_within_one_fraction() {
        for hours in [100.0, 4_816.0, 8_000.0] {
            let fraction = hours_to_year_fraction(hours);
            let back = year_fraction_to_hours(fraction);
            assert!(
                (back - hours).abs() < 1.0 / MAKR_CONSTANT,
                "hours {} came back as {}",
                hours,
                back
            );
        }
    }

    #[test]
    fn test_days_hours() {
        assert_eq!(days_to_hours(2.0), 48.0);
        assert_eq!(hours_to_days(48.0), 2.0);
    }
}
