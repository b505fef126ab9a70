//! Lenient date/time parsing.
//!
//! Feeds carry RFC 822 dates with wrong weekday names, ISO 8601 timestamps
//! with and without offsets, US-style dates, epoch numbers and free text such
//! as "Published: October 2nd, 2002". [`parse_date`] tries a fixed list of
//! patterns, repairs the two most common publisher mistakes per pattern, and
//! finally retries once on a cleaned-up copy of the text.

use chrono::format::{self, Fixed, Item, ParseErrorKind, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::model::Temporal;
use crate::util::collapse_whitespace;

/// Repairs (weekday strip, trailing-input truncation) allowed per pattern.
const MAX_REPAIRS: usize = 2;

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Rfc2822,
    Rfc3339,
    Zoned(&'static str),
    Local(&'static str),
    Date(&'static str),
}

/// Zoned patterns first, then offset-less date-times, then plain dates.
const PATTERNS: &[Pattern] = &[
    Pattern::Rfc2822,
    Pattern::Rfc3339,
    Pattern::Zoned("%a, %d %b %Y %H:%M:%S %z"),
    Pattern::Zoned("%a, %d %b %Y %H:%M %z"),
    Pattern::Zoned("%d %b %Y %H:%M:%S %z"),
    Pattern::Zoned("%d %b %Y %H:%M %z"),
    Pattern::Zoned("%a, %d %b %Y %I:%M:%S %p %z"),
    Pattern::Zoned("%a, %d %b %Y %I:%M %p %z"),
    Pattern::Zoned("%d %b %Y %I:%M:%S %p %z"),
    Pattern::Zoned("%d %b %Y %I:%M %p %z"),
    // RFC 850 ("Wednesday, 02-Oct-02"); two-digit years first
    Pattern::Zoned("%a, %d-%b-%y %H:%M:%S %z"),
    Pattern::Zoned("%a, %d-%b-%Y %H:%M:%S %z"),
    Pattern::Zoned("%a %b %d %H:%M:%S %z %Y"),
    Pattern::Zoned("%Y-%m-%dT%H:%M:%S%.f%z"),
    Pattern::Zoned("%Y-%m-%dT%H:%M%z"),
    Pattern::Zoned("%Y-%m-%d %H:%M:%S%.f %z"),
    Pattern::Zoned("%Y-%m-%d %H:%M:%S%.f%z"),
    Pattern::Zoned("%Y/%m/%d %H:%M:%S %z"),
    Pattern::Local("%a, %d %b %Y %I:%M:%S %p"),
    Pattern::Local("%a, %d %b %Y %I:%M %p"),
    Pattern::Local("%d %b %Y %I:%M:%S %p"),
    Pattern::Local("%d %b %Y %I:%M %p"),
    Pattern::Local("%a, %d %b %Y %H:%M:%S"),
    Pattern::Local("%a, %d %b %Y %H:%M"),
    Pattern::Local("%d %b %Y %H:%M:%S"),
    Pattern::Local("%d %b %Y %H:%M"),
    Pattern::Local("%a, %d-%b-%y %H:%M:%S"),
    Pattern::Local("%a, %d-%b-%Y %H:%M:%S"),
    Pattern::Local("%a %b %d %H:%M:%S %Y"),
    Pattern::Local("%b %d %Y %H:%M:%S"),
    Pattern::Local("%Y-%m-%dT%H:%M:%S%.f"),
    Pattern::Local("%Y-%m-%dT%H:%M"),
    Pattern::Local("%Y-%m-%d %H:%M:%S%.f"),
    Pattern::Local("%Y-%m-%d %H:%M"),
    Pattern::Local("%Y/%m/%d %H:%M:%S"),
    Pattern::Local("%m/%d/%Y %H:%M:%S"),
    Pattern::Local("%m/%d/%Y %I:%M:%S %p"),
    Pattern::Local("%m/%d/%Y %I:%M %p"),
    Pattern::Date("%Y-%m-%d"),
    Pattern::Date("%a, %d %b %Y"),
    Pattern::Date("%d %b %Y"),
    Pattern::Date("%b %d %Y"),
    Pattern::Date("%Y/%m/%d"),
    Pattern::Date("%m/%d/%Y"),
    Pattern::Date("%d.%m.%Y"),
];

/// Textual zone names publishers put where RFC 822 wants a numeric offset.
const ZONE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Z", "+0000"),
    ("UT", "+0000"),
    ("UTC", "+0000"),
    ("GMT", "+0000"),
    ("EST", "-0500"),
    ("EDT", "-0400"),
    ("CST", "-0600"),
    ("CDT", "-0500"),
    ("MST", "-0700"),
    ("MDT", "-0600"),
    ("PST", "-0800"),
    ("PDT", "-0700"),
    ("BST", "+0100"),
    ("CET", "+0100"),
    ("CEST", "+0200"),
    ("EET", "+0200"),
    ("EEST", "+0300"),
    ("JST", "+0900"),
    ("AEST", "+1000"),
    ("AEDT", "+1100"),
];

/// Canonical abbreviation and every spelling that maps to it. chrono's `%b`
/// and `%a` only accept the abbreviations.
const MONTH_NAMES: &[(&str, &[&str])] = &[
    ("Jan", &["jan", "january"]),
    ("Feb", &["feb", "february"]),
    ("Mar", &["mar", "march"]),
    ("Apr", &["apr", "april"]),
    ("May", &["may"]),
    ("Jun", &["jun", "june"]),
    ("Jul", &["jul", "july"]),
    ("Aug", &["aug", "august"]),
    ("Sep", &["sep", "sept", "september"]),
    ("Oct", &["oct", "october"]),
    ("Nov", &["nov", "november"]),
    ("Dec", &["dec", "december"]),
];

const WEEKDAY_NAMES: &[(&str, &[&str])] = &[
    ("Mon", &["mon", "monday"]),
    ("Tue", &["tue", "tues", "tuesday"]),
    ("Wed", &["wed", "wednesday"]),
    ("Thu", &["thu", "thur", "thurs", "thursday"]),
    ("Fri", &["fri", "friday"]),
    ("Sat", &["sat", "saturday"]),
    ("Sun", &["sun", "sunday"]),
];

/// Named zones allowed in front of a numeric offset ("GMT+2").
const OFFSET_PREFIXES: &[&str] = &["GMT", "UTC", "UT"];

enum Failure {
    /// The weekday name disagrees with the date it labels.
    WeekdayMismatch,
    /// The pattern matched a prefix; the byte offset where it stopped.
    TrailingInput(usize),
    Other,
}

impl Pattern {
    fn parse(self, input: &str) -> Result<Temporal, Failure> {
        let result = match self {
            Pattern::Rfc2822 => DateTime::parse_from_rfc2822(input).map(Temporal::Zoned),
            Pattern::Rfc3339 => DateTime::parse_from_rfc3339(input).map(Temporal::Zoned),
            Pattern::Zoned(fmt) => DateTime::parse_from_str(input, fmt).map(Temporal::Zoned),
            Pattern::Local(fmt) => NaiveDateTime::parse_from_str(input, fmt).map(Temporal::Local),
            Pattern::Date(fmt) => NaiveDate::parse_from_str(input, fmt).map(Temporal::Date),
        };

        result.map_err(|err| match err.kind() {
            ParseErrorKind::Impossible => Failure::WeekdayMismatch,
            ParseErrorKind::TooLong => self
                .consumed_len(input)
                .map_or(Failure::Other, Failure::TrailingInput),
            _ => Failure::Other,
        })
    }

    /// Byte length of the prefix this pattern consumes, if it is a proper prefix.
    fn consumed_len(self, input: &str) -> Option<usize> {
        let mut parsed = Parsed::new();
        let remainder = match self {
            Pattern::Rfc2822 => {
                format::parse_and_remainder(&mut parsed, input, [Item::Fixed(Fixed::RFC2822)].iter())
            }
            Pattern::Rfc3339 => {
                format::parse_and_remainder(&mut parsed, input, [Item::Fixed(Fixed::RFC3339)].iter())
            }
            Pattern::Zoned(fmt) | Pattern::Local(fmt) | Pattern::Date(fmt) => {
                format::parse_and_remainder(&mut parsed, input, StrftimeItems::new(fmt))
            }
        }
        .ok()?;

        let consumed = input.len() - remainder.len();
        (consumed > 0 && consumed < input.len()).then_some(consumed)
    }

    /// The same pattern without its leading weekday directive.
    fn without_weekday(self) -> Option<Pattern> {
        fn strip(fmt: &'static str) -> Option<&'static str> {
            fmt.strip_prefix("%a, ").or_else(|| fmt.strip_prefix("%a "))
        }

        match self {
            // RFC 2822 treats the weekday as optional
            Pattern::Rfc2822 => Some(Pattern::Rfc2822),
            Pattern::Rfc3339 => None,
            Pattern::Zoned(fmt) => strip(fmt).map(Pattern::Zoned),
            Pattern::Local(fmt) => strip(fmt).map(Pattern::Local),
            Pattern::Date(fmt) => strip(fmt).map(Pattern::Date),
        }
    }
}

/// Parses a publisher-supplied date.
///
/// Returns `None` when nothing matches; never panics. Zoned inputs produce
/// [`Temporal::Zoned`], offset-less date-times [`Temporal::Local`], bare dates
/// [`Temporal::Date`]. Ten-digit and thirteen-digit numbers are read as Unix
/// seconds and milliseconds.
///
/// # Examples
///
/// ```
/// use podfeed::lenient::parse_date;
///
/// // 02 Oct 2002 was a Wednesday; the wrong label is ignored.
/// assert_eq!(
///     parse_date("Sun, 02 Oct 2002 15:00:00 +0200"),
///     parse_date("Wed, 02 Oct 2002 15:00:00 +0200"),
/// );
/// assert!(parse_date("not a date").is_none());
/// ```
pub fn parse_date(raw: &str) -> Option<Temporal> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return None;
    }

    if let Some(parsed) = parse_candidates(&normalized) {
        return Some(parsed);
    }

    // Single deep-clean retry; never recurses further.
    let cleaned = deep_clean(&normalized);
    if cleaned.is_empty() || cleaned == normalized {
        return None;
    }
    parse_candidates(&cleaned)
}

fn parse_candidates(input: &str) -> Option<Temporal> {
    PATTERNS
        .iter()
        .find_map(|pattern| attempt(*pattern, input))
        .or_else(|| parse_epoch(input))
}

/// One pattern with a bounded number of repairs.
fn attempt(pattern: Pattern, input: &str) -> Option<Temporal> {
    let mut pattern = pattern;
    let mut candidate = Cow::Borrowed(input);

    for _ in 0..=MAX_REPAIRS {
        match pattern.parse(&candidate) {
            Ok(parsed) => return Some(parsed),
            Err(Failure::WeekdayMismatch) => {
                let stripped_pattern = pattern.without_weekday()?;
                let rest = strip_leading_weekday(&candidate)?.to_string();
                pattern = stripped_pattern;
                candidate = Cow::Owned(rest);
            }
            Err(Failure::TrailingInput(end)) => {
                // A meridiem or zone after the match would change the instant
                if carries_time(&candidate[end..]) {
                    return None;
                }
                let truncated = candidate[..end].trim_end().to_string();
                candidate = Cow::Owned(truncated);
            }
            Err(Failure::Other) => return None,
        }
    }

    None
}

fn parse_epoch(input: &str) -> Option<Temporal> {
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = input.parse().ok()?;
    let instant = match input.len() {
        9..=11 => DateTime::from_timestamp(value, 0)?,
        12..=14 => DateTime::from_timestamp_millis(value)?,
        _ => return None,
    };
    Some(Temporal::Zoned(instant.fixed_offset()))
}

/// Collapses whitespace, rewrites textual zones into numeric offsets and
/// shortens month and weekday names.
fn normalize(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    let normalized = collapsed
        .split(' ')
        .map(normalize_token)
        .collect::<Vec<_>>()
        .join(" ");

    // ISO 8601 "Z" glued to the time
    let bytes = normalized.as_bytes();
    if bytes.len() > 1
        && matches!(bytes[bytes.len() - 1], b'Z' | b'z')
        && bytes[bytes.len() - 2].is_ascii_digit()
    {
        return format!("{}+00:00", &normalized[..normalized.len() - 1]);
    }

    normalized
}

fn normalize_token(token: &str) -> Cow<'_, str> {
    if let Some(offset) = zone_offset(token) {
        return Cow::Borrowed(offset);
    }
    if let Some(offset) = prefixed_offset(token) {
        return Cow::Owned(offset);
    }
    abbreviate_name(token)
}

fn zone_offset(token: &str) -> Option<&'static str> {
    ZONE_ABBREVIATIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, offset)| *offset)
}

/// "GMT+2", "UTC-05:00" or "GMT+0530" as a `+HHMM` offset.
fn prefixed_offset(token: &str) -> Option<String> {
    let split = token.find(['+', '-'])?;
    let (name, offset) = token.split_at(split);
    if !OFFSET_PREFIXES.iter().any(|zone| zone.eq_ignore_ascii_case(name)) {
        return None;
    }

    let (sign, digits) = offset.split_at(1);
    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }
    let (hours, minutes) = match digits.split_once(':') {
        Some(parts) => parts,
        None if digits.len() > 2 => digits.split_at(digits.len() - 2),
        None => (digits, "0"),
    };
    if !(1..=2).contains(&hours.len()) || !(1..=2).contains(&minutes.len()) {
        return None;
    }

    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    (hours <= 14 && minutes < 60).then(|| format!("{sign}{hours:02}{minutes:02}"))
}

/// Whether text left over after a match still says something about the
/// time of day: a meridiem, a signed offset or a zone name.
fn carries_time(rest: &str) -> bool {
    let Some(token) = rest.split_whitespace().next() else {
        return false;
    };

    let mut chars = token.chars();
    if let (Some('+' | '-'), Some(next)) = (chars.next(), chars.next()) {
        if next.is_ascii_digit() {
            return true;
        }
    }

    let word = token.trim_end_matches(['.', ',', ')']).to_ascii_lowercase();
    matches!(word.as_str(), "am" | "pm" | "a.m" | "p.m")
        || zone_offset(&word).is_some()
        || prefixed_offset(&word).is_some()
}

/// Drops a leading alphabetic token such as "Wed," or "Wednesday".
fn strip_leading_weekday(input: &str) -> Option<&str> {
    let (first, rest) = input.split_once(' ')?;
    let word = first.trim_end_matches([',', '.']);
    if word.is_empty() || !word.chars().all(|c| c.is_alphabetic()) {
        return None;
    }
    Some(rest.trim_start())
}

/// Cleanup for free-text dates: leading label, commas, ordinals, "Sept."
fn deep_clean(input: &str) -> String {
    let mut tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.first().is_some_and(|first| is_non_date_token(first)) {
        tokens.remove(0);
    }

    let words: Vec<Cow<'_, str>> = tokens.iter().map(|t| abbreviate_name(t)).collect();
    let joined = words.join(" ").replace(',', " ");
    let without_ordinals = ordinal_suffix().replace_all(&joined, "$1");
    collapse_whitespace(&without_ordinals).into_owned()
}

fn is_non_date_token(token: &str) -> bool {
    let word = token.trim_end_matches([',', '.', ':']);
    !word.is_empty() && !word.chars().any(|c| c.is_ascii_digit()) && !is_month_like(word)
}

fn is_month_like(word: &str) -> bool {
    word.get(..3).is_some_and(|prefix| {
        MONTH_NAMES
            .iter()
            .any(|(short, _)| short.eq_ignore_ascii_case(prefix))
    })
}

/// "Wednesday," becomes "Wed,"; "October", "Sept." and "oct" become "Oct"
/// and "Sep". Anything else is returned as is.
fn abbreviate_name(token: &str) -> Cow<'_, str> {
    let word = token.trim_end_matches(['.', ',']);
    if word.len() < 3 || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Cow::Borrowed(token);
    }

    let lower = word.to_ascii_lowercase();
    let Some((short, _)) = MONTH_NAMES
        .iter()
        .chain(WEEKDAY_NAMES)
        .find(|(_, spellings)| spellings.contains(&lower.as_str()))
    else {
        return Cow::Borrowed(token);
    };

    if word == *short && !token.ends_with('.') {
        return Cow::Borrowed(token);
    }
    let trailing_comma = if token.ends_with(',') { "," } else { "" };
    Cow::Owned(format!("{short}{trailing_comma}"))
}

fn ordinal_suffix() -> &'static Regex {
    static ORDINAL: OnceLock<Regex> = OnceLock::new();
    ORDINAL.get_or_init(|| {
        Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").expect("ordinal pattern is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, NaiveDate, TimeZone};

    fn zoned(offset_secs: i32, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Temporal {
        let offset = FixedOffset::east_opt(offset_secs).unwrap();
        Temporal::Zoned(offset.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    #[test]
    fn test_rfc822() {
        assert_eq!(
            parse_date("Wed, 02 Oct 2002 15:00:00 +0200"),
            Some(zoned(7200, 2002, 10, 2, 15, 0, 0))
        );
    }

    #[test]
    fn test_wrong_weekday_is_ignored() {
        assert_eq!(
            parse_date("Sun, 02 Oct 2002 15:00:00 +0200"),
            Some(zoned(7200, 2002, 10, 2, 15, 0, 0))
        );
        // 12 Jan 2020 was a Sunday
        assert_eq!(
            parse_date("Wed, 12 Jan 2020"),
            Some(Temporal::Date(NaiveDate::from_ymd_opt(2020, 1, 12).unwrap()))
        );
    }

    #[test]
    fn test_named_zones() {
        assert_eq!(
            parse_date("Mon, 01 Jan 2024 12:00:00 GMT"),
            Some(zoned(0, 2024, 1, 1, 12, 0, 0))
        );
        assert_eq!(
            parse_date("Mon, 01 Jan 2024 12:00:00 EST"),
            Some(zoned(-5 * 3600, 2024, 1, 1, 12, 0, 0))
        );
        assert_eq!(
            parse_date("Mon, 01 Jan 2024 12:00:00 cest"),
            Some(zoned(2 * 3600, 2024, 1, 1, 12, 0, 0))
        );
    }

    #[test]
    fn test_trailing_garbage_truncated() {
        assert_eq!(
            parse_date("Wed, 02 Oct 2002 15:00:00 +0200 (Central European)"),
            Some(zoned(7200, 2002, 10, 2, 15, 0, 0))
        );
    }

    #[test]
    fn test_iso8601_variants() {
        assert_eq!(
            parse_date("2002-10-02T15:00:00Z"),
            Some(zoned(0, 2002, 10, 2, 15, 0, 0))
        );
        assert_eq!(
            parse_date("2002-10-02T15:00:00.123+02:00").map(|t| t.to_utc().unwrap()),
            parse_date("2002-10-02T13:00:00.123Z").map(|t| t.to_utc().unwrap())
        );
        assert_eq!(
            parse_date("2002-10-02 15:00:00"),
            Some(Temporal::Local(
                NaiveDate::from_ymd_opt(2002, 10, 2)
                    .unwrap()
                    .and_hms_opt(15, 0, 0)
                    .unwrap()
            ))
        );
        assert_eq!(
            parse_date("2002-10-02"),
            Some(Temporal::Date(NaiveDate::from_ymd_opt(2002, 10, 2).unwrap()))
        );
    }

    #[test]
    fn test_local_and_zoned_stay_distinct() {
        let local = parse_date("Wed, 02 Oct 2002 15:00:00").unwrap();
        assert!(matches!(local, Temporal::Local(_)));
        let zoned = parse_date("Wed, 02 Oct 2002 15:00:00 +0000").unwrap();
        assert!(zoned.is_zoned());
        assert_ne!(local, zoned);
    }

    #[test]
    fn test_single_digit_day_and_long_names() {
        assert_eq!(
            parse_date("Wednesday, 2 October 2002 15:00:00 +0200"),
            Some(zoned(7200, 2002, 10, 2, 15, 0, 0))
        );
    }

    #[test]
    fn test_epoch_numbers() {
        assert_eq!(
            parse_date("1700000000"),
            Some(zoned(0, 2023, 11, 14, 22, 13, 20))
        );
        assert_eq!(
            parse_date("1700000000000"),
            Some(zoned(0, 2023, 11, 14, 22, 13, 20))
        );
        assert!(parse_date("12345").is_none());
    }

    #[test]
    fn test_deep_clean_free_text() {
        let expected = Some(Temporal::Date(NaiveDate::from_ymd_opt(2002, 10, 2).unwrap()));
        assert_eq!(parse_date("Wednesday, October 2nd, 2002"), expected);
        assert_eq!(parse_date("Published: Oct 2, 2002"), expected);
        assert_eq!(parse_date("2nd Sept. 2002").map(|t| t.date().month0()), Some(8));
    }

    #[test]
    fn test_full_month_names() {
        let new_year = Some(Temporal::Date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));
        assert_eq!(parse_date("1st January 2020"), new_year);
        assert_eq!(parse_date("January 1st, 2020"), new_year);
        assert_eq!(parse_date("1 January 2020"), new_year);
        assert_eq!(
            parse_date("3rd March 2021"),
            Some(Temporal::Date(NaiveDate::from_ymd_opt(2021, 3, 3).unwrap()))
        );
        assert_eq!(
            parse_date("Thursday, 3 October 2002 09:30 +0000"),
            Some(zoned(0, 2002, 10, 3, 9, 30, 0))
        );
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(
            parse_date("Wed, 02 Oct 2002 03:00 PM GMT"),
            Some(zoned(0, 2002, 10, 2, 15, 0, 0))
        );
        assert_eq!(
            parse_date("Wed, 02 Oct 2002 03:00:30 pm +0200"),
            Some(zoned(7200, 2002, 10, 2, 15, 0, 30))
        );
        assert_eq!(
            parse_date("10 Jun 2003 4:00 PM"),
            Some(Temporal::Local(
                NaiveDate::from_ymd_opt(2003, 6, 10)
                    .unwrap()
                    .and_hms_opt(16, 0, 0)
                    .unwrap()
            ))
        );
        assert_eq!(
            parse_date("Tue, 10 Jun 2003 11:15:00 AM"),
            Some(Temporal::Local(
                NaiveDate::from_ymd_opt(2003, 6, 10)
                    .unwrap()
                    .and_hms_opt(11, 15, 0)
                    .unwrap()
            ))
        );
    }

    #[test]
    fn test_offset_after_zone_name() {
        assert_eq!(
            parse_date("Sun, 02 Oct 2002 15:00:00 GMT+2"),
            Some(zoned(7200, 2002, 10, 2, 15, 0, 0))
        );
        assert_eq!(
            parse_date("Wed, 02 Oct 2002 15:00:00 UTC-05:30"),
            Some(zoned(-(5 * 3600 + 30 * 60), 2002, 10, 2, 15, 0, 0))
        );
        assert_eq!(prefixed_offset("GMT+0530").as_deref(), Some("+0530"));
        assert_eq!(prefixed_offset("GMT+"), None);
        assert_eq!(prefixed_offset("EST+2"), None);
        assert_eq!(prefixed_offset("UTC+99"), None);
    }

    #[test]
    fn test_truncation_keeps_time_information() {
        assert_eq!(attempt(Pattern::Local("%d %b %Y %H:%M"), "10 Jun 2003 4:00 PM"), None);
        assert_eq!(
            attempt(Pattern::Local("%a, %d %b %Y %H:%M:%S"), "Wed, 02 Oct 2002 15:00:00 +0200"),
            None
        );
        assert!(carries_time(" PM"));
        assert!(carries_time(" a.m."));
        assert!(carries_time(" -0500"));
        assert!(carries_time(" EST"));
        assert!(carries_time(" GMT+2"));
        assert!(!carries_time(" (Central European)"));
        assert!(!carries_time(""));
    }

    #[test]
    fn test_rfc850() {
        assert_eq!(
            parse_date("Wednesday, 02-Oct-02 15:00:00 GMT"),
            Some(zoned(0, 2002, 10, 2, 15, 0, 0))
        );
        assert_eq!(
            parse_date("Wed, 02-Oct-2002 15:00:00 GMT"),
            Some(zoned(0, 2002, 10, 2, 15, 0, 0))
        );
    }

    #[test]
    fn test_abbreviate_names() {
        assert_eq!(abbreviate_name("Wednesday,"), "Wed,");
        assert_eq!(abbreviate_name("october"), "Oct");
        assert_eq!(abbreviate_name("Sept."), "Sep");
        assert_eq!(abbreviate_name("Oct"), "Oct");
        assert_eq!(abbreviate_name("Published:"), "Published:");
        assert_eq!(abbreviate_name("2002"), "2002");
    }

    #[test]
    fn test_unparseable_returns_none() {
        assert!(parse_date("").is_none());
        assert!(parse_date("   ").is_none());
        assert!(parse_date("not a date").is_none());
        assert!(parse_date("32 Foo 2020 25:61").is_none());
    }

    #[test]
    fn test_deep_clean_helpers() {
        assert_eq!(deep_clean("On Oct 1st, 2020"), "Oct 1 2020");
        assert_eq!(deep_clean("Sept. 3rd 2021"), "Sep 3 2021");
        assert_eq!(strip_leading_weekday("Wed, 02 Oct"), Some("02 Oct"));
        assert_eq!(strip_leading_weekday("02 Oct"), None);
    }
}
