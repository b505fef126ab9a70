//! RawVoice/Blubrry (`rawvoice:`) elements.

use std::io::BufRead;

use super::fields::{self, Cursor};
use super::Outcome;
use crate::feed::cursor::StreamError;
use crate::model::{Feed, Funding, Item};

pub(super) fn feed_element<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    feed: &mut Feed,
) -> Result<Outcome, StreamError> {
    match cursor.local_name() {
        "rating" => {
            let rating = fields::line(cursor)?;
            fields::fill(&mut feed.rating, rating);
        }
        "location" => {
            let location = fields::line(cursor)?;
            fields::fill(&mut feed.location, location);
        }
        "frequency" => {
            if let Some(frequency) = fields::line(cursor)? {
                fields::fill(&mut feed.schedule_mut().period, Some(frequency.to_ascii_lowercase()));
            }
        }
        "donate" => {
            let url = fields::attr(cursor, "href");
            let message = fields::line(cursor)?;
            feed.funding.extend(url.map(|url| Funding { url, message }));
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
        "poster" => item.images.extend(fields::image_from_attr(cursor, "url")?),
        _ => return Ok(Outcome::Unmapped),
    }
    Ok(Outcome::Consumed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::namespace::fields::on_child;

    #[test]
    fn test_donate_and_frequency() {
        let mut cursor = on_child(
            r#"<channel><rawvoice:donate href="http://x/give">Tip jar</rawvoice:donate><rawvoice:frequency>Weekly</rawvoice:frequency></channel>"#,
        );
        let mut feed = Feed::default();
        feed_element(&mut cursor, &mut feed).unwrap();
        assert!(cursor.next_child().unwrap());
        feed_element(&mut cursor, &mut feed).unwrap();

        assert_eq!(feed.funding[0].url, "http://x/give");
        assert_eq!(feed.funding[0].message.as_deref(), Some("Tip jar"));
        assert_eq!(feed.update_schedule.unwrap().period.as_deref(), Some("weekly"));
    }

    #[test]
    fn test_poster() {
        let mut cursor = on_child(r#"<item><rawvoice:poster url="http://x/p.jpg"/></item>"#);
        let mut item = Item::default();
        item_element(&mut cursor, &mut item).unwrap();
        assert_eq!(item.images[0].url, "http://x/p.jpg");
    }
}
