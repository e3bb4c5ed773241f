/// Delimiter between the parts of a composite date code, as in `3.996.636.M41`.
pub const CODE_DELIMITER: char = '.';

/// A composite date code carries at most four parts; excess parts are
/// dropped from the start.
pub const MAX_CODE_PARTS: usize = 4;

/// The empirical "Makr constant": year-fraction counts per hour elapsed in a
/// Gregorian year. Described in the Imperial Dating System article under
/// "Year Fraction".
pub const MAKR_CONSTANT: f64 = 0.11407955;
