//! Media RSS (`media:`) elements.
//!
//! `media:group` wraps alternative renditions of the same episode; its
//! Media RSS children are mapped exactly as if they appeared directly in the
//! item. Children from any other namespace are skipped.

use std::io::BufRead;

use super::fields::{self, Cursor};
use super::Outcome;
use crate::feed::cursor::{StreamCursor, StreamError};
use crate::model::{Feed, Image, Item, MediaContent, Person};

pub(super) fn feed_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    feed: &mut Feed,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "thumbnail" => feed.images.extend(thumbnail(cursor)?),
        "title" => {
            let title = fields::line(cursor)?;
            fields::fill(&mut feed.title, title);
        }
        "description" => {
            let description = fields::text(cursor)?;
            fields::fill(&mut feed.description, description);
        }
        "keywords" => feed.keywords.extend(fields::keywords(cursor)?),
        "category" => feed.categories.extend(fields::text_category(cursor)?),
        "rating" => feed.rating = fields::line(cursor)?,
        "copyright" => {
            let copyright = fields::line(cursor)?;
            fields::fill(&mut feed.copyright, copyright);
        }
        "credit" => feed.credits.extend(credit(cursor)?),
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

pub(super) fn item_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    item: &mut Item,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "group" => {
            let group = cursor.namespace_uri().map(str::to_string);
            while cursor.next_child()? {
                if !in_namespace(cursor, group.as_deref()) {
                    tracing::trace!(element = %cursor.qualified_name(), "Skipping foreign element in media:group");
                    cursor.skip_subtree()?;
                } else if item_element(cursor, item)? == Outcome::Unmapped {
                    cursor.skip_subtree()?;
                }
            }
        }
        "content" => item.media.push(content(cursor)?),
        "thumbnail" => item.images.extend(thumbnail(cursor)?),
        "title" => {
            let title = fields::line(cursor)?;
            fields::fill(&mut item.title, title);
        }
        "description" => {
            let description = fields::text(cursor)?;
            fields::fill(&mut item.description, description);
        }
        "keywords" => item.keywords.extend(fields::keywords(cursor)?),
        "category" => item.categories.extend(fields::text_category(cursor)?),
        "credit" => item.credits.extend(credit(cursor)?),
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

fn content<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<MediaContent, StreamError> {
    let parent = cursor.namespace_uri().map(str::to_string);
    let mut content = MediaContent {
        url: fields::attr(cursor, "url"),
        mime_type: fields::attr(cursor, "type"),
        medium: fields::attr(cursor, "medium"),
        file_size: fields::attr_integer(cursor, "fileSize"),
        duration: fields::attr_duration(cursor, "duration"),
        bitrate: fields::attr_decimal(cursor, "bitrate"),
        framerate: fields::attr_decimal(cursor, "framerate"),
        width: fields::attr_integer(cursor, "width"),
        height: fields::attr_integer(cursor, "height"),
        language: fields::attr(cursor, "lang"),
        is_default: fields::attr_flag(cursor, "isDefault"),
        expression: fields::attr(cursor, "expression"),
        ..MediaContent::default()
    };

    while cursor.next_child()? {
        if !in_namespace(cursor, parent.as_deref()) {
            cursor.skip_subtree()?;
            continue;
        }
        match cursor.local_name() {
            "title" => content.title = fields::line(cursor)?,
            "thumbnail" => content.thumbnails.extend(thumbnail(cursor)?),
            _ => cursor.skip_subtree()?,
        }
    }

    Ok(content)
}

fn in_namespace<R>(cursor: &StreamCursor<'_, R>, namespace: Option<&str>) -> bool {
    cursor.namespace_uri() == namespace
}

fn thumbnail<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<Image>, StreamError> {
    fields::image_from_attr(cursor, "url")
}

/// `<media:credit role="host" scheme="urn:ebu">Name</media:credit>`
fn credit<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<Person>, StreamError> {
    let role = fields::attr(cursor, "role");
    Ok(fields::named_person(cursor)?.map(|person| Person { role, ..person }))
}
