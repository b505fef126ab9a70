//! RSS Syndication module (`sy:`): how often the publisher updates.

use std::io::BufRead;

use super::fields::{self, Cursor};
use super::Outcome;
use crate::feed::cursor::StreamError;
use crate::model::Feed;

pub(super) fn feed_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    feed: &mut Feed,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "updatePeriod" => {
            if let Some(period) = fields::text(cursor)? {
                feed.schedule_mut().period = Some(period.to_ascii_lowercase());
            }
        }
        "updateFrequency" => {
            if let Some(frequency) = fields::integer(cursor, "sy:updateFrequency")? {
                feed.schedule_mut().frequency = Some(frequency);
            }
        }
        "updateBase" => {
            if let Some(base) = fields::date(cursor, "sy:updateBase")? {
                feed.schedule_mut().base = Some(base);
            }
        }
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}
