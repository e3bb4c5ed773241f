use crate::constants::CODE_DELIMITER;
use crate::parsing::parse_date_code;
use crate::DateResult;
use imperium_core::{CheckNumber, Decoded, Millennium, Year, YearFraction};
use std::fmt;
use std::str::FromStr;

/// A complete date in the imperial calendar.
///
/// A container for a mandatory millennium and an optional year, year
/// fraction, and check number. The code form concatenates the elements
/// least significant first, delimited by periods: `0.123.456.M41`.
///
/// The year fraction only appears in the code form when the year is also
/// present — a lone year fraction would be indistinguishable from a year.
/// It still counts toward the date's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImperialDate {
    millennium: Millennium,
    year: Option<Year>,
    year_fraction: Option<YearFraction>,
    check_number: Option<CheckNumber>,
}

impl ImperialDate {
    /// Creates a date from its elements.
    pub fn from_elements(
        millennium: Millennium,
        year: Option<Year>,
        year_fraction: Option<YearFraction>,
        check_number: Option<CheckNumber>,
    ) -> Self {
        Self {
            millennium,
            year,
            year_fraction,
            check_number,
        }
    }

    /// Creates a date carrying only a millennium.
    pub fn from_millennium(millennium: Millennium) -> Self {
        Self::from_elements(millennium, None, None, None)
    }

    /// Creates a date from the element numbers: counts for the millennium,
    /// year, and year fraction, and the index for the check number.
    pub fn from_numbers(
        millennium: i64,
        year: Option<i64>,
        year_fraction: Option<i64>,
        check_number: Option<i64>,
    ) -> Self {
        Self::from_elements(
            Millennium::from_count(millennium),
            year.map(Year::from_count),
            year_fraction.map(YearFraction::from_count),
            check_number.map(CheckNumber::from_index),
        )
    }

    /// Decodes a composite date code such as `3.996.636.M41`.
    ///
    /// See [`parse_date_code`](crate::parsing::parse_date_code) for the part
    /// disambiguation rules and the advisories this can raise.
    pub fn from_code(code: &str) -> DateResult<Decoded<Self>> {
        parse_date_code(code)
    }

    pub fn millennium(&self) -> Millennium {
        self.millennium
    }

    pub fn year(&self) -> Option<Year> {
        self.year
    }

    pub fn year_fraction(&self) -> Option<YearFraction> {
        self.year_fraction
    }

    pub fn check_number(&self) -> Option<CheckNumber> {
        self.check_number
    }

    /// Whether the year fraction appears in the code form. It does only when
    /// both the year and the year fraction are present.
    pub fn includes_year_fraction_in_code(&self) -> bool {
        self.year.is_some() && self.year_fraction.is_some()
    }

    /// The code forms of the elements written in the composite code, in
    /// order of most significance.
    fn codifiable(&self) -> Vec<String> {
        let mut parts = vec![self.millennium.code()];
        if let Some(year) = self.year {
            parts.push(year.code());
        }
        if self.includes_year_fraction_in_code() {
            if let Some(fraction) = self.year_fraction {
                parts.push(fraction.code());
            }
        }
        if let Some(check) = self.check_number {
            parts.push(check.code());
        }
        parts
    }

    /// The composite code form: element codes delimited by periods, with the
    /// check number first and the millennium last.
    pub fn code(&self) -> String {
        let mut parts = self.codifiable();
        parts.reverse();
        parts.join(&CODE_DELIMITER.to_string())
    }

    /// Seconds from the calendar epoch to this date: the sum of the
    /// durations of the elements that carry one.
    ///
    /// A year fraction suppressed from the code form still counts here.
    pub fn duration(&self) -> f64 {
        let mut total = self.millennium.duration();
        if let Some(year) = self.year {
            total += year.duration();
        }
        if let Some(fraction) = self.year_fraction {
            total += fraction.duration();
        }
        total
    }
}

impl fmt::Display for ImperialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ImperialDate {
    type Err = crate::DateError;

    /// Parses a composite code form, discarding any advisories.
    fn from_str(s: &str) -> DateResult<Self> {
        Ok(Self::from_code(s)?.into_value())
    }
}
