//! Atom 1.0 and 0.3 elements, as the root format and as `atom:` elements
//! embedded in RSS.

use std::io::BufRead;

use super::fields::{self, Cursor};
use super::Outcome;
use crate::feed::cursor::{StreamCursor, StreamError};
use crate::model::{Category, Enclosure, Feed, Image, Item, Link};

pub(super) fn feed_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    feed: &mut Feed,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "title" => feed.title = fields::line(cursor)?,
        "subtitle" | "tagline" => feed.subtitle = fields::text(cursor)?,
        "id" => feed.id = fields::text(cursor)?,
        "updated" | "modified" => feed.updated = fields::date(cursor, "updated")?,
        "published" | "issued" => feed.published = fields::date(cursor, "published")?,
        "rights" | "copyright" => feed.copyright = fields::line(cursor)?,
        "generator" => feed.generator = fields::line(cursor)?,
        "icon" | "logo" => {
            if let Some(url) = fields::text(cursor)? {
                feed.images.push(Image::new(url));
            }
        }
        "link" => {
            if let Some(link) = link(cursor)? {
                if link.is_alternate() {
                    fields::fill(&mut feed.link, Some(link.href.clone()));
                }
                feed.links.push(link);
            }
        }
        "author" => feed.authors.push(fields::person_construct(cursor)?),
        "contributor" => feed.contributors.push(fields::person_construct(cursor)?),
        "category" => feed.categories.extend(category(cursor)?),
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
        "id" => fields::fill(&mut item.guid, fields::text(cursor)?),
        "updated" | "modified" => item.updated = fields::date(cursor, "updated")?,
        "published" | "issued" | "created" => {
            let published = fields::date(cursor, "published")?;
            fields::fill(&mut item.published, published);
        }
        "summary" => item.summary = fields::text(cursor)?,
        "content" => {
            let src = fields::attr(cursor, "src");
            let body = fields::text(cursor)?;
            match (body, src) {
                (Some(body), _) => item.content = Some(body),
                (None, Some(src)) => item.links.push(Link {
                    rel: Some("content".to_string()),
                    ..Link::new(src)
                }),
                (None, None) => {}
            }
        }
        "link" => {
            if let Some(link) = link(cursor)? {
                if link.rel.as_deref() == Some("enclosure") {
                    item.enclosures.push(Enclosure {
                        url: link.href.clone(),
                        length: link.length,
                        mime_type: link.mime_type.clone(),
                    });
                } else if link.is_alternate() {
                    fields::fill(&mut item.link, Some(link.href.clone()));
                }
                item.links.push(link);
            }
        }
        "author" => item.authors.push(fields::person_construct(cursor)?),
        "contributor" => item.contributors.push(fields::person_construct(cursor)?),
        "category" => item.categories.extend(category(cursor)?),
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

fn link<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<Link>, StreamError> {
    let link = link_attributes(cursor);
    cursor.skip_subtree()?;
    Ok(link)
}

fn link_attributes<R>(cursor: &StreamCursor<'_, R>) -> Option<Link> {
    let href = cursor.attribute("href")?;
    Some(Link {
        href: href.to_string(),
        rel: fields::attr(cursor, "rel"),
        mime_type: fields::attr(cursor, "type"),
        title: fields::attr(cursor, "title"),
        length: fields::attr_integer(cursor, "length"),
        hreflang: fields::attr(cursor, "hreflang"),
    })
}

/// Atom categories carry their name in `term`, never in the text.
fn category<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<Category>, StreamError> {
    let category = cursor.attribute("term").map(|term| Category {
        name: term.to_string(),
        scheme: fields::attr(cursor, "scheme"),
        label: fields::attr(cursor, "label"),
        subcategories: Vec::new(),
    });
    cursor.skip_subtree()?;
    Ok(category)
}
