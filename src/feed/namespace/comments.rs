//! Comment extensions: Slash (`slash:comments`) and Well-Formed Web
//! (`wfw:commentRss`, `wfw:comment`).

use std::io::BufRead;

use super::fields::{self, Cursor};
use super::Outcome;
use crate::feed::cursor::StreamError;
use crate::model::Item;

pub(super) fn slash_item_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    item: &mut Item,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "comments" => item.comment_count = fields::integer(cursor, "slash:comments")?,
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

pub(super) fn wfw_item_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    item: &mut Item,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "commentRss" | "commentRSS" => item.comment_feed = fields::text(cursor)?,
        "comment" => {
            let comments = fields::text(cursor)?;
            fields::fill(&mut item.comments, comments);
        }
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}
