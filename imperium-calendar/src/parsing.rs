//! Decoding of composite date codes.
//!
//! A composite code splits on the period into one to four parts. The last
//! part is always the millennium; the remaining parts are told apart by the
//! part count and the length of the first part alone:
//!
//! ```text
//! 1 part:                          millennium only
//! 2 parts: first part one digit -> check number
//!          otherwise             -> year
//! 3 parts: second part           -> year (always)
//!          first part one digit  -> check number
//!          otherwise             -> year fraction
//! 4 parts: first                 -> check number
//!          second                -> year fraction
//!          third                 -> year
//! ```
//!
//! The scheme is inherently lossy for short fields: a one-digit first part
//! at two or three parts is always read as a check number, so single-digit
//! years and year fractions cannot be produced by decoding. That is the
//! defined behaviour of the dating system, not an error to correct here.
//!
//! More than four parts raises an [`Advisory`] and drops the excess from
//! the start; parts that cannot be read as numbers at all are errors.

use crate::constants::{CODE_DELIMITER, MAX_CODE_PARTS};
use crate::date::ImperialDate;
use crate::DateResult;
use imperium_core::{Advisory, CheckNumber, Decoded, Millennium, Year, YearFraction};

/// Decodes a composite date code into an [`ImperialDate`] plus any
/// advisories raised along the way.
///
/// An empty input decodes as the default 41st millennium, with an advisory.
///
/// # Example
///
/// ```
/// use imperium_calendar::parse_date_code;
///
/// let decoded = parse_date_code("5.123.M31").unwrap();
/// let date = decoded.into_value();
/// assert_eq!(date.check_number().unwrap().index(), 5);
/// assert_eq!(date.year().unwrap().count(), 123);
/// assert!(date.year_fraction().is_none());
/// ```
pub fn parse_date_code(code: &str) -> DateResult<Decoded<ImperialDate>> {
    let mut advisories = Vec::new();

    let mut parts: Vec<&str> = code.split(CODE_DELIMITER).collect();
    if parts.len() > MAX_CODE_PARTS {
        advisories.push(Advisory::ExcessCodeParts {
            found: parts.len(),
            limit: MAX_CODE_PARTS,
        });
        parts.drain(..parts.len() - MAX_CODE_PARTS);
    }
    let part_count = parts.len();

    // The last part is always the millennium.
    let (millennium, millennium_advisories) =
        Millennium::from_code(parts[part_count - 1])?.into_parts();
    advisories.extend(millennium_advisories);

    let mut check_code = None;
    let mut year_fraction_code = None;
    let mut year_code = None;

    // A one-digit first part is the check number, whatever the part count.
    if part_count > 1 && parts[0].len() == 1 {
        check_code = Some(parts[0]);
    }

    match part_count {
        2 => {
            if check_code.is_none() {
                year_code = Some(parts[0]);
            }
        }
        3 => {
            year_code = Some(parts[1]);
            if check_code.is_none() {
                year_fraction_code = Some(parts[0]);
            }
        }
        4 => {
            if check_code.is_none() {
                check_code = Some(parts[0]);
            }
            year_fraction_code = Some(parts[1]);
            year_code = Some(parts[2]);
        }
        _ => {}
    }

    let check_number = check_code.map(CheckNumber::from_code).transpose()?;
    let year_fraction = year_fraction_code.map(YearFraction::from_code).transpose()?;
    let year = year_code.map(Year::from_code).transpose()?;

    let date = ImperialDate::from_elements(millennium, year, year_fraction, check_number);
    Ok(Decoded::with_advisories(date, advisories))
}
