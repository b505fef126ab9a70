//! RSS content module: `content:encoded` carries the full show notes.

use std::io::BufRead;

use super::fields::{self, Cursor};
use super::Outcome;
use crate::feed::cursor::StreamError;
use crate::model::Item;

pub(super) fn item_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    item: &mut Item,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "encoded" => item.content = fields::text(cursor)?,
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}
