//! Apple Podcasts (`itunes:`) elements.

use std::io::BufRead;

use super::fields::{self, Cursor};
use super::Outcome;
use crate::feed::cursor::StreamError;
use crate::model::{Category, Feed, Item, Person};

pub(super) fn feed_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    feed: &mut Feed,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "author" => feed.authors.extend(fields::named_person(cursor)?),
        "owner" => feed.owner = Some(owner(cursor)?),
        "category" => feed.categories.extend(category(cursor)?),
        "image" => feed.images.extend(fields::image_from_attr(cursor, "href")?),
        "explicit" => feed.explicit = fields::flag(cursor, "itunes:explicit")?,
        "block" => feed.block = fields::flag(cursor, "itunes:block")?,
        "complete" => feed.complete = fields::flag(cursor, "itunes:complete")?,
        "type" => feed.show_type = fields::text(cursor)?.map(|t| t.to_ascii_lowercase()),
        "new-feed-url" => feed.new_feed_url = fields::text(cursor)?,
        "subtitle" => feed.subtitle = fields::text(cursor)?,
        "summary" => feed.summary = fields::text(cursor)?,
        "keywords" => feed.keywords.extend(fields::keywords(cursor)?),
        "title" => {
            let title = fields::line(cursor)?;
            fields::fill(&mut feed.title, title);
        }
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

pub(super) fn item_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    item: &mut Item,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "title" => item.episode_title = fields::line(cursor)?,
        "author" => item.authors.extend(fields::named_person(cursor)?),
        "duration" => item.duration = fields::duration(cursor, "itunes:duration")?,
        "explicit" => item.explicit = fields::flag(cursor, "itunes:explicit")?,
        "block" => item.block = fields::flag(cursor, "itunes:block")?,
        "episode" => item.episode = fields::integer(cursor, "itunes:episode")?,
        "season" => item.season = fields::integer(cursor, "itunes:season")?,
        "episodeType" => {
            item.episode_type = fields::text(cursor)?.map(|t| t.to_ascii_lowercase())
        }
        "image" => item.images.extend(fields::image_from_attr(cursor, "href")?),
        "subtitle" => item.subtitle = fields::text(cursor)?,
        "summary" => item.summary = fields::text(cursor)?,
        "keywords" => item.keywords.extend(fields::keywords(cursor)?),
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

fn owner<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Person, StreamError> {
    let mut person = Person::default();
    while cursor.next_child()? {
        match cursor.local_name() {
            "name" => person.name = fields::line(cursor)?,
            "email" => person.email = fields::text(cursor)?,
            _ => cursor.skip_subtree()?,
        }
    }
    Ok(person)
}

/// `<itunes:category text="...">`, with nested categories becoming
/// subcategories of the enclosing one.
fn category<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<Category>, StreamError> {
    let name = fields::attr(cursor, "text");
    let mut subcategories = Vec::new();

    while cursor.next_child()? {
        if cursor.local_name() == "category" {
            subcategories.extend(category(cursor)?);
        } else {
            cursor.skip_subtree()?;
        }
    }

    Ok(name.map(|name| Category {
        name,
        subcategories,
        ..Category::default()
    }))
}
