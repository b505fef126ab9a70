//! Lenient episode duration parsing (`itunes:duration`, `media:content@duration`).

use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

use crate::util::collapse_whitespace;

/// Parses a duration into whole milliseconds.
///
/// Accepts `SS`, `MM:SS` and `HH:MM:SS`, each with an optional fraction on
/// the seconds, and textual forms such as `26 minutes` or `1 hour 5 min`.
/// Segments after the third colon-separated one are ignored.
///
/// # Examples
///
/// ```
/// use podfeed::lenient::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1:02:03"), Some(Duration::from_millis(3_723_000)));
/// assert_eq!(parse_duration("26 minutes"), Some(Duration::from_secs(1_560)));
/// assert_eq!(parse_duration("not a duration"), None);
/// ```
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let normalized = collapse_whitespace(raw).to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    parse_clock(&normalized).or_else(|| parse_textual(&normalized))
}

fn parse_clock(input: &str) -> Option<Duration> {
    let parts: Vec<&str> = input.split(':').map(str::trim).collect();

    let (hours, minutes, seconds) = match parts.as_slice() {
        [seconds] => (0, 0, *seconds),
        [minutes, seconds] => (0, whole(minutes)?, *seconds),
        [hours, minutes, seconds, ..] => (whole(hours)?, whole(minutes)?, *seconds),
        [] => return None,
    };
    let (seconds, millis) = seconds_with_fraction(seconds)?;

    let total_secs = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    let total_millis = total_secs.checked_mul(1000)?.checked_add(millis)?;
    Some(Duration::from_millis(total_millis))
}

fn whole(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// `"45.5"` -> `(45, 500)`; fractions longer than three digits are truncated.
fn seconds_with_fraction(segment: &str) -> Option<(u64, u64)> {
    let Some((secs, fraction)) = segment.split_once('.') else {
        return Some((whole(segment)?, 0));
    };
    let secs = whole(secs)?;
    if fraction.is_empty() {
        return Some((secs, 0));
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = &fraction[..fraction.len().min(3)];
    let scale = 10u64.pow(3 - digits.len() as u32);
    let millis: u64 = digits.parse().ok()?;
    Some((secs, millis * scale))
}

fn parse_textual(input: &str) -> Option<Duration> {
    let mut total_millis = 0f64;
    let mut matched = false;

    for caps in unit_token().captures_iter(input) {
        let Ok(value) = caps[1].parse::<f64>() else {
            continue;
        };
        let millis_per_unit = match &caps[2] {
            "h" | "hr" | "hrs" | "hour" | "hours" => 3_600_000.0,
            "m" | "min" | "mins" | "minute" | "minutes" => 60_000.0,
            "s" | "sec" | "secs" | "second" | "seconds" => 1_000.0,
            _ => continue,
        };
        total_millis += value * millis_per_unit;
        matched = true;
    }

    if !matched || !total_millis.is_finite() || total_millis >= u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_millis(total_millis.round() as u64))
}

fn unit_token() -> &'static Regex {
    static UNIT: OnceLock<Regex> = OnceLock::new();
    UNIT.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d+)?)\s*([a-z]+)").expect("duration unit pattern is valid")
    })
}
