//! Podcast Index namespace (`podcast:`).

use std::io::BufRead;

use super::fields::{self, Cursor};
use super::Outcome;
use crate::feed::cursor::{StreamCursor, StreamError};
use crate::model::{Chapters, Feed, Funding, Item, Person, Transcript};

pub(super) fn feed_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    feed: &mut Feed,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "guid" => feed.podcast_guid = fields::text(cursor)?,
        "locked" => {
            feed.lock_owner = fields::attr(cursor, "owner");
            feed.locked = fields::flag(cursor, "podcast:locked")?;
        }
        "funding" => feed.funding.extend(funding(cursor)?),
        "person" => feed.credits.extend(person(cursor)?),
        "location" => feed.location = fields::line(cursor)?,
        "medium" => feed.medium = fields::text(cursor)?.map(|m| m.to_ascii_lowercase()),
        "image" => feed.images.extend(fields::image_from_attr(cursor, "href")?),
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

pub(super) fn item_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    item: &mut Item,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "transcript" => {
            item.transcripts.extend(transcript(cursor));
            cursor.skip_subtree()?;
        }
        "chapters" => {
            item.chapters = chapters(cursor);
            cursor.skip_subtree()?;
        }
        "person" => item.credits.extend(person(cursor)?),
        "funding" => item.funding.extend(funding(cursor)?),
        "season" => {
            let season = fields::integer(cursor, "podcast:season")?;
            fields::fill(&mut item.season, season);
        }
        "episode" => {
            let episode = fields::integer(cursor, "podcast:episode")?;
            fields::fill(&mut item.episode, episode);
        }
        "image" => item.images.extend(fields::image_from_attr(cursor, "href")?),
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

fn transcript<R>(cursor: &StreamCursor<'_, R>) -> Option<Transcript> {
    Some(Transcript {
        url: fields::attr(cursor, "url")?,
        mime_type: fields::attr(cursor, "type"),
        language: fields::attr(cursor, "language"),
        rel: fields::attr(cursor, "rel"),
    })
}

fn chapters<R>(cursor: &StreamCursor<'_, R>) -> Option<Chapters> {
    Some(Chapters {
        url: fields::attr(cursor, "url")?,
        mime_type: fields::attr(cursor, "type"),
    })
}

fn funding<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<Funding>, StreamError> {
    let url = fields::attr(cursor, "url");
    let message = fields::line(cursor)?;
    Ok(url.map(|url| Funding { url, message }))
}

/// `<podcast:person role="host" group="cast" img="..." href="...">Name</podcast:person>`
fn person<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<Person>, StreamError> {
    let role = fields::attr(cursor, "role").map(|r| r.to_ascii_lowercase());
    let group = fields::attr(cursor, "group").map(|g| g.to_ascii_lowercase());
    let image = fields::attr(cursor, "img");
    let uri = fields::attr(cursor, "href");

    Ok(fields::named_person(cursor)?.map(|person| Person {
        // Role defaults to "host" in the "cast" group
        role: Some(role.unwrap_or_else(|| "host".to_string())),
        group: Some(group.unwrap_or_else(|| "cast".to_string())),
        image,
        uri,
        ..person
    }))
}
