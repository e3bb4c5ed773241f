/// Days in the mean Gregorian year, leap cycle included.
pub const GREGORIAN_YEAR_DAYS: f64 = 365.2425;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const HOURS_PER_DAY: i64 = 24;

/// Seconds in the mean Gregorian year (365.2425 × 86 400).
pub const GREGORIAN_YEAR_SECONDS: f64 = GREGORIAN_YEAR_DAYS * SECONDS_PER_DAY_F64;

/// Years spanned by one millennium element.
pub const YEARS_PER_MILLENNIUM: i64 = 1_000;

/// Seconds spanned by one whole millennium element.
pub const MILLENNIUM_SECONDS: f64 = YEARS_PER_MILLENNIUM as f64 * GREGORIAN_YEAR_SECONDS;

/// Seconds spanned by one year-fraction element (1/1000 of a Gregorian year).
pub const YEAR_FRACTION_SECONDS: f64 = GREGORIAN_YEAR_SECONDS / BASE_YEAR_MAX as f64;

/// Lower bound of the year and year-fraction counts.
pub const BASE_YEAR_MIN: i64 = 1;

/// Upper bound of the year and year-fraction counts. In code form this count
/// is written as [`THOUSAND_CODE`], not as four digits.
pub const BASE_YEAR_MAX: i64 = 1_000;

/// Width of a year or year-fraction code form.
pub const BASE_YEAR_CODE_LEN: usize = 3;

/// Pad character for short year and year-fraction codes.
pub const BASE_YEAR_PAD: char = '0';

/// Code form of the count 1000.
pub const THOUSAND_CODE: &str = "000";

/// Prefix of a millennium code form, as in `M41`.
pub const MILLENNIUM_PREFIX: char = 'M';

pub const MILLENNIUM_MIN: i64 = 1;

/// Millennium count assumed when a code omits one.
pub const DEFAULT_MILLENNIUM_COUNT: i64 = 41;
