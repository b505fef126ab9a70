use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

/// A publisher-supplied point in time, at the precision the publisher wrote it.
///
/// Zoned values carry an offset and identify an instant. Local values and
/// plain dates have no offset and are kept as written; converting them to an
/// instant requires a zone the feed never stated, so no conversion is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "precision", content = "value")]
pub enum Temporal {
    /// Date and time with an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Date and time without any offset information.
    Local(NaiveDateTime),
    /// Calendar date only.
    Date(NaiveDate),
}

impl Temporal {
    /// Returns the instant in UTC for zoned values, `None` otherwise.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Temporal::Zoned(dt) => Some(dt.with_timezone(&Utc)),
            Temporal::Local(_) | Temporal::Date(_) => None,
        }
    }

    /// Returns the calendar date as written by the publisher.
    pub fn date(&self) -> NaiveDate {
        match self {
            Temporal::Zoned(dt) => dt.date_naive(),
            Temporal::Local(dt) => dt.date(),
            Temporal::Date(d) => *d,
        }
    }

    pub fn is_zoned(&self) -> bool {
        matches!(self, Temporal::Zoned(_))
    }
}
