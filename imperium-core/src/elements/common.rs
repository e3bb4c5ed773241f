use crate::constants::{BASE_YEAR_CODE_LEN, BASE_YEAR_MAX, BASE_YEAR_PAD, THOUSAND_CODE};
use crate::errors::{ImperiumError, ImperiumResult};

pub(crate) fn parse_count(element: &str, text: &str) -> ImperiumResult<i64> {
    text.parse::<i64>()
        .map_err(|_| ImperiumError::invalid_code(element, text, "expected a decimal integer"))
}

/// Decodes a three-digit base-year code into a count in 1..=1000.
///
/// Excess leading characters are dropped; short codes are left-padded with
/// zeroes. The literal `"000"` reads as 1000.
pub(crate) fn decode_base_year(element: &str, code: &str) -> ImperiumResult<i64> {
    if !code.is_ascii() {
        return Err(ImperiumError::invalid_code(
            element,
            code,
            "expected a decimal integer",
        ));
    }

    let tail = if code.len() > BASE_YEAR_CODE_LEN {
        &code[code.len() - BASE_YEAR_CODE_LEN..]
    } else {
        code
    };

    let mut padded = String::with_capacity(BASE_YEAR_CODE_LEN);
    for _ in tail.len()..BASE_YEAR_CODE_LEN {
        padded.push(BASE_YEAR_PAD);
    }
    padded.push_str(tail);

    if padded == THOUSAND_CODE {
        return Ok(BASE_YEAR_MAX);
    }

    parse_count(element, &padded)
}

/// Encodes a base-year count as its three-digit code form, 1000 as `"000"`.
pub(crate) fn encode_base_year(count: i64) -> String {
    if count == BASE_YEAR_MAX {
        THOUSAND_CODE.to_string()
    } else {
        format!("{:0>width$}", count, width = BASE_YEAR_CODE_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain() {
        assert_eq!(decode_base_year("year", "123").unwrap(), 123);
        assert_eq!(decode_base_year("year", "001").unwrap(), 1);
    }

    #[test]
    fn test_decode_thousand_code() {
        assert_eq!(decode_base_year("year", "000").unwrap(), 1_000);
    }

    #[test]
    fn test_decode_short_code_pads() {
        assert_eq!(decode_base_year("year", "7").unwrap(), 7);
        assert_eq!(decode_base_year("year", "42").unwrap(), 42);
        // An empty code pads to "000", which reads as 1000.
        assert_eq!(decode_base_year("year", "").unwrap(), 1_000);
    }

    #[test]
    fn test_decode_long_code_keeps_tail() {
        assert_eq!(decode_base_year("year", "987654").unwrap(), 654);
        assert_eq!(decode_base_year("year", "1000").unwrap(), 1_000);
    }

    #[test]
    fn test_decode_rejects_non_numeric() {
        assert!(decode_base_year("year", "abc").is_err());
        assert!(decode_base_year("year", "1a3").is_err());
        assert!(decode_base_year("year", "½½½").is_err());
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode_base_year(1), "001");
        assert_eq!(encode_base_year(42), "042");
        assert_eq!(encode_base_year(999), "999");
        assert_eq!(encode_base_year(1_000), "000");
    }
}
