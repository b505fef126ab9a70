//! Dublin Core elements and terms (`dc:`, `dcterms:`).
//!
//! Dublin Core mostly restates core fields, so titles, descriptions, dates
//! and identifiers only fill what the root format left blank.

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
        "title" => {
            let title = fields::line(cursor)?;
            fields::fill(&mut feed.title, title);
        }
        "description" | "abstract" => {
            let description = fields::text(cursor)?;
            fields::fill(&mut feed.description, description);
        }
        "creator" => feed.authors.extend(fields::named_person(cursor)?),
        "contributor" => feed.contributors.extend(fields::named_person(cursor)?),
        "publisher" => feed.contributors.extend(publisher(cursor)?),
        "subject" => feed.categories.extend(fields::line(cursor)?.map(Category::new)),
        "language" => {
            let language = fields::text(cursor)?;
            fields::fill(&mut feed.language, language);
        }
        "rights" => {
            let rights = fields::line(cursor)?;
            fields::fill(&mut feed.copyright, rights);
        }
        "date" | "issued" | "created" => {
            let date = fields::date(cursor, "dc:date")?;
            fields::fill(&mut feed.published, date);
        }
        "modified" => {
            let date = fields::date(cursor, "dcterms:modified")?;
            fields::fill(&mut feed.updated, date);
        }
        "identifier" => {
            let id = fields::text(cursor)?;
            fields::fill(&mut feed.id, id);
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
        "title" => {
            let title = fields::line(cursor)?;
            fields::fill(&mut item.title, title);
        }
        "description" | "abstract" => {
            let description = fields::text(cursor)?;
            fields::fill(&mut item.description, description);
        }
        "creator" => item.authors.extend(fields::named_person(cursor)?),
        "contributor" => item.contributors.extend(fields::named_person(cursor)?),
        "subject" => item.categories.extend(fields::line(cursor)?.map(Category::new)),
        "date" | "issued" | "created" => {
            let date = fields::date(cursor, "dc:date")?;
            fields::fill(&mut item.published, date);
        }
        "modified" => {
            let date = fields::date(cursor, "dcterms:modified")?;
            fields::fill(&mut item.updated, date);
        }
        "identifier" => {
            let id = fields::text(cursor)?;
            fields::fill(&mut item.guid, id);
        }
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

fn publisher<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<Person>, StreamError> {
    Ok(fields::named_person(cursor)?.map(|person| Person {
        role: Some("publisher".to_string()),
        ..person
    }))
}
