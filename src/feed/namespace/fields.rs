//! Readers shared by the namespace handlers.
//!
//! Scalar readers consume the current element. Values that do not parse are
//! logged at debug level with the field name and left unset.

use std::io::BufRead;
use std::str::FromStr;
use std::time::Duration;

use crate::feed::cursor::{StreamCursor, StreamError};
use crate::lenient::{parse_date, parse_decimal, parse_duration, parse_flag, parse_integer};
use crate::model::{Category, Image, Person, Temporal};
use crate::util::{collapse_whitespace, split_list};

pub(super) type Cursor<'c, 'a, R> = &'c mut StreamCursor<'a, R>;

pub(super) fn text<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<String>, StreamError> {
    cursor.element_text()
}

/// Text with internal whitespace runs collapsed, for titles and names.
pub(super) fn line<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Option<String>, StreamError> {
    Ok(cursor
        .element_text()?
        .map(|text| collapse_whitespace(&text).into_owned()))
}

/// Writes `value` only when `slot` is still empty.
pub(super) fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

pub(super) fn date<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    field: &'static str,
) -> Result<Option<Temporal>, StreamError> {
    let Some(raw) = cursor.element_text()? else {
        return Ok(None);
    };
    let parsed = parse_date(&raw);
    if parsed.is_none() {
        tracing::debug!(field, raw = %raw, "Ignoring unparseable date");
    }
    Ok(parsed)
}

pub(super) fn duration<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    field: &'static str,
) -> Result<Option<Duration>, StreamError> {
    let Some(raw) = cursor.element_text()? else {
        return Ok(None);
    };
    let parsed = parse_duration(&raw);
    if parsed.is_none() {
        tracing::debug!(field, raw = %raw, "Ignoring unparseable duration");
    }
    Ok(parsed)
}

pub(super) fn integer<T: FromStr, R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    field: &'static str,
) -> Result<Option<T>, StreamError> {
    let Some(raw) = cursor.element_text()? else {
        return Ok(None);
    };
    Ok(scalar(&raw, field, parse_integer))
}

pub(super) fn flag<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    field: &'static str,
) -> Result<Option<bool>, StreamError> {
    let Some(raw) = cursor.element_text()? else {
        return Ok(None);
    };
    Ok(scalar(&raw, field, parse_flag))
}

pub(super) fn keywords<R: BufRead>(cursor: Cursor<'_, '_, R>) -> Result<Vec<String>, StreamError> {
    Ok(cursor
        .element_text()?
        .map(|raw| split_list(&raw))
        .unwrap_or_default())
}

pub(super) fn attr<R>(cursor: &StreamCursor<'_, R>, name: &str) -> Option<String> {
    cursor.attribute(name).map(str::to_string)
}

pub(super) fn attr_integer<T: FromStr, R>(cursor: &StreamCursor<'_, R>, name: &'static str) -> Option<T> {
    cursor
        .attribute(name)
        .and_then(|raw| scalar(raw, name, parse_integer))
}

pub(super) fn attr_decimal<R>(cursor: &StreamCursor<'_, R>, name: &'static str) -> Option<f64> {
    cursor
        .attribute(name)
        .and_then(|raw| scalar(raw, name, parse_decimal))
}

pub(super) fn attr_flag<R>(cursor: &StreamCursor<'_, R>, name: &'static str) -> Option<bool> {
    cursor
        .attribute(name)
        .and_then(|raw| scalar(raw, name, parse_flag))
}

pub(super) fn attr_duration<R>(cursor: &StreamCursor<'_, R>, name: &'static str) -> Option<Duration> {
    cursor
        .attribute(name)
        .and_then(|raw| scalar(raw, name, parse_duration))
}

fn scalar<T>(raw: &str, field: &'static str, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(raw);
    if parsed.is_none() {
        tracing::debug!(field, raw = %raw, "Ignoring unparseable value");
    }
    parsed
}

/// Reads an element whose URL is in `attribute` (`href`, `url`).
pub(super) fn image_from_attr<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
    attribute: &str,
) -> Result<Option<Image>, StreamError> {
    let image = cursor.attribute(attribute).map(|url| Image {
        url: url.to_string(),
        width: attr_integer(cursor, "width"),
        height: attr_integer(cursor, "height"),
        ..Image::default()
    });
    cursor.skip_subtree()?;
    Ok(image)
}

/// A category whose name is the element text, with RSS `domain` or
/// Media RSS `scheme` and `label` attributes.
pub(super) fn text_category<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
) -> Result<Option<Category>, StreamError> {
    let scheme = attr(cursor, "domain").or_else(|| attr(cursor, "scheme"));
    let label = attr(cursor, "label");
    Ok(line(cursor)?.map(|name| Category {
        name,
        scheme,
        label,
        subcategories: Vec::new(),
    }))
}

/// An Atom-style person construct: `name`, `email` and `uri` children.
pub(super) fn person_construct<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
) -> Result<Person, StreamError> {
    let mut person = Person::default();
    while cursor.next_child()? {
        match cursor.local_name() {
            "name" => person.name = line(cursor)?,
            "email" => person.email = text(cursor)?,
            "uri" | "url" => person.uri = text(cursor)?,
            _ => cursor.skip_subtree()?,
        }
    }
    Ok(person)
}

/// A person given as plain text, such as `itunes:author` or `dc:creator`.
pub(super) fn named_person<R: BufRead>(
    cursor: Cursor<'_, '_, R>,
) -> Result<Option<Person>, StreamError> {
    Ok(line(cursor)?.map(Person::named))
}

/// Cursor positioned on the first child of the root element.
#[cfg(test)]
pub(super) fn on_child(xml: &str) -> StreamCursor<'static, &[u8]> {
    let mut cursor = StreamCursor::new(xml.as_bytes(), &crate::feed::entities::SafeEntityResolver);
    cursor.advance_to_root().unwrap();
    assert!(cursor.next_child().unwrap());
    cursor
}
