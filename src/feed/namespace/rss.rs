//! RSS 2.0 core elements (and the RSS 0.9x/1.0 elements that share names).

use std::io::BufRead;

use super::fields::{self, Cursor};
use super::Outcome;
use crate::feed::cursor::{StreamCursor, StreamError};
use crate::model::{Enclosure, Feed, Image, Item, Link, Person};

pub(super) fn feed_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    feed: &mut Feed,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "title" => feed.title = fields::line(cursor)?,
        "link" => {
            if let Some(href) = link_target(cursor)? {
                feed.link = Some(href.clone());
                feed.links.push(Link::new(href));
            }
        }
        "description" => feed.description = fields::text(cursor)?,
        "language" => feed.language = fields::text(cursor)?,
        "copyright" => feed.copyright = fields::line(cursor)?,
        "managingEditor" => {
            if let Some(raw) = fields::text(cursor)? {
                feed.authors.push(Person::from_rss_author(&raw));
            }
        }
        "webMaster" => {
            if let Some(raw) = fields::text(cursor)? {
                let mut person = Person::from_rss_author(&raw);
                person.role = Some("webmaster".to_string());
                feed.contributors.push(person);
            }
        }
        "generator" => feed.generator = fields::line(cursor)?,
        "pubDate" => feed.published = fields::date(cursor, "pubDate")?,
        "lastBuildDate" => feed.updated = fields::date(cursor, "lastBuildDate")?,
        "ttl" => feed.ttl = fields::integer(cursor, "ttl")?,
        "category" => feed.categories.extend(fields::text_category(cursor)?),
        "image" => feed.images.extend(image(cursor)?),
        "rating" => feed.rating = fields::line(cursor)?,
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

pub(super) fn item_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    item: &mut Item,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "title" => item.title = fields::line(cursor)?,
        "link" => {
            if let Some(href) = link_target(cursor)? {
                item.link = Some(href.clone());
                item.links.push(Link::new(href));
            }
        }
        "description" => item.description = fields::text(cursor)?,
        "author" => {
            if let Some(raw) = fields::text(cursor)? {
                item.authors.push(Person::from_rss_author(&raw));
            }
        }
        "category" => item.categories.extend(fields::text_category(cursor)?),
        "comments" => item.comments = fields::text(cursor)?,
        "enclosure" => {
            item.enclosures.extend(enclosure(cursor));
            cursor.skip_subtree()?;
        }
        "guid" => {
            item.guid_is_permalink = fields::attr_flag(cursor, "isPermaLink");
            item.guid = fields::text(cursor)?;
        }
        "pubDate" => item.published = fields::date(cursor, "pubDate")?,
        "source" => {
            item.source = fields::attr(cursor, "url");
            cursor.skip_subtree()?;
        }
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

/// `<link>` text, or an `href` attribute for feeds that write Atom-style
/// links without the Atom namespace.
fn link_target<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<String>, StreamError> {
    let href = fields::attr(cursor, "href");
    let text = fields::text(cursor)?;
    Ok(text.or(href))
}

fn enclosure<R>(cursor: &StreamCursor<'_, R>) -> Option<Enclosure> {
    let url = cursor.attribute("url")?;
    Some(Enclosure {
        url: url.to_string(),
        length: fields::attr_integer(cursor, "length"),
        mime_type: fields::attr(cursor, "type"),
    })
}

/// `<image>` with `url`, `title`, `link`, `width`, `height` and
/// `description` children.
fn image<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<Image>, StreamError> {
    let mut image = Image::default();
    let mut url = fields::attr(cursor, "url").or_else(|| fields::attr(cursor, "href"));

    while cursor.next_child()? {
        match cursor.local_name() {
            "url" => fields::fill(&mut url, fields::text(cursor)?),
            "title" => image.title = fields::line(cursor)?,
            "link" => image.link = fields::text(cursor)?,
            "width" => image.width = fields::integer(cursor, "image width")?,
            "height" => image.height = fields::integer(cursor, "image height")?,
            "description" => image.description = fields::text(cursor)?,
            _ => cursor.skip_subtree()?,
        }
    }

    Ok(url.map(|url| Image { url, ..image }))
}
