//! Lenient scalar parsing for counts, sizes and yes/no flags.

use std::str::FromStr;

/// Parses an integer, tolerating digit grouping and a zero fraction.
///
/// `"1,024"`, `"1_024"` and `"1024.0"` all read as 1024. A non-zero fraction
/// is rejected rather than rounded.
pub fn parse_integer<T: FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut digits: String = trimmed.chars().filter(|c| !matches!(c, ',' | '_')).collect();
    if let Some(dot) = digits.find('.') {
        if !digits[dot + 1..].bytes().all(|b| b == b'0') {
            return None;
        }
        digits.truncate(dot);
    }

    digits.parse().ok()
}

/// Parses a finite decimal number.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses the yes/no vocabulary used by `itunes:explicit`, `itunes:block`
/// and friends.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "explicit" | "1" | "y" => Some(true),
        "no" | "false" | "clean" | "0" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<u64>("123"), Some(123));
        assert_eq!(parse_integer::<u64>(" 1,024 "), Some(1024));
        assert_eq!(parse_integer::<u64>("1_000_000"), Some(1_000_000));
        assert_eq!(parse_integer::<u32>("7.0"), Some(7));
        assert_eq!(parse_integer::<i32>("-3"), Some(-3));
    }

    #[test]
    fn test_parse_integer_rejects() {
        assert_eq!(parse_integer::<u64>(""), None);
        assert_eq!(parse_integer::<u64>("12.5"), None);
        assert_eq!(parse_integer::<u64>("-1"), None);
        assert_eq!(parse_integer::<u32>("abc"), None);
        assert_eq!(parse_integer::<u8>("300"), None);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("29.97"), Some(29.97));
        assert_eq!(parse_decimal(" 128 "), Some(128.0));
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("fast"), None);
    }

    #[test]
    fn test_parse_flag() {
        for yes in ["yes", "True", "EXPLICIT", "1", "y"] {
            assert_eq!(parse_flag(yes), Some(true), "{yes}");
        }
        for no in ["no", "false", "Clean", "0", "N"] {
            assert_eq!(parse_flag(no), Some(false), "{no}");
        }
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }
}
