//! Google Play Podcasts (`googleplay:`) elements.
//!
//! Google's tags mostly duplicate iTunes ones, so they only fill fields the
//! richer namespaces left blank.

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
        "owner" | "email" => {
            if let Some(email) = fields::text(cursor)? {
                let owner = feed.owner.get_or_insert_with(Person::default);
                fields::fill(&mut owner.email, Some(email));
            }
        }
        "description" => {
            let description = fields::text(cursor)?;
            fields::fill(&mut feed.description, description);
        }
        "category" => {
            if let Some(name) = fields::attr(cursor, "text") {
                feed.categories.push(Category::new(name));
            }
            cursor.skip_subtree()?;
        }
        "image" => feed.images.extend(fields::image_from_attr(cursor, "href")?),
        "explicit" => {
            let explicit = fields::flag(cursor, "googleplay:explicit")?;
            fields::fill(&mut feed.explicit, explicit);
        }
        "block" => {
            let block = fields::flag(cursor, "googleplay:block")?;
            fields::fill(&mut feed.block, block);
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
        "description" => {
            let description = fields::text(cursor)?;
            fields::fill(&mut item.description, description);
        }
        "explicit" => {
            let explicit = fields::flag(cursor, "googleplay:explicit")?;
            fields::fill(&mut item.explicit, explicit);
        }
        "block" => {
            let block = fields::flag(cursor, "googleplay:block")?;
            fields::fill(&mut item.block, block);
        }
        "image" => item.images.extend(fields::image_from_attr(cursor, "href")?),
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}
