//! Forward-only, position-aware walk over an XML document.
//!
//! [`StreamCursor`] wraps a `quick_xml::NsReader` and only ever stops on
//! element boundaries. Text is read on demand through
//! [`StreamCursor::element_text`]; everything between elements that nobody
//! asked for is dropped. Self-closing elements are expanded so every element
//! has a start and an end event.

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::name::ResolveResult;
use quick_xml::{Decoder, NsReader};
use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::BufRead;
use thiserror::Error;

use super::entities::EntityResolver;

/// SEC-003: Maximum element nesting depth.
/// Prevents unbounded stack growth from maliciously nested documents.
pub const MAX_DEPTH: usize = 256;

/// Fatal problems with the byte stream itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The tokenizer could not continue.
    #[error("XML parse error: {0}")]
    Xml(String),

    /// Bytes could not be decoded in the document's encoding.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The document ended while an element was still open.
    #[error("document ended inside <{element}>")]
    UnexpectedEnd { element: String },

    /// A start-element-only operation was called somewhere else.
    #[error("{operation} called while not positioned on a start element")]
    Misplaced { operation: &'static str },

    /// SEC-003: nesting depth exceeds safety limit.
    #[error("element nesting exceeds maximum of {0} levels")]
    TooDeep(usize),
}

/// The kind of event the cursor is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    BeforeDocument,
    StartElement,
    EndElement,
    EndDocument,
}

#[derive(Debug, Clone)]
struct XmlAttribute {
    qualified_name: String,
    local_name: String,
    value: String,
}

impl XmlAttribute {
    fn is_namespace_declaration(&self) -> bool {
        self.qualified_name == "xmlns" || self.qualified_name.starts_with("xmlns:")
    }
}

/// What one read produced, after depth bookkeeping.
enum Pulled {
    Start,
    End,
    Text(String),
    Eof,
}

/// Owned copy of an event, so the read buffer can be reused.
enum RawEvent {
    Start {
        qualified: String,
        local: String,
        attributes: Vec<XmlAttribute>,
    },
    End {
        qualified: String,
        local: String,
    },
    Text(String),
    Doctype(String),
    Eof,
}

/// Position-aware cursor over one XML document.
///
/// The cursor owns the reader; dropping the cursor releases the input on
/// every exit path.
pub struct StreamCursor<'a, R> {
    reader: NsReader<R>,
    buf: Vec<u8>,
    resolver: &'a dyn EntityResolver,
    kind: EventKind,
    /// Qualified names of the open elements, outermost first.
    stack: Vec<String>,
    /// Depth of the current element; the root is 1.
    depth: usize,
    namespace: Option<String>,
    local_name: String,
    qualified_name: String,
    attributes: Vec<XmlAttribute>,
    doctype: Option<String>,
}

impl<'a, R: BufRead> StreamCursor<'a, R> {
    pub fn new(input: R, resolver: &'a dyn EntityResolver) -> Self {
        let mut reader = NsReader::from_reader(input);
        reader.config_mut().expand_empty_elements = true;

        Self {
            reader,
            buf: Vec::with_capacity(1024),
            resolver,
            kind: EventKind::BeforeDocument,
            stack: Vec::new(),
            depth: 0,
            namespace: None,
            local_name: String::new(),
            qualified_name: String::new(),
            attributes: Vec::new(),
            doctype: None,
        }
    }

    /// Moves to the document's root start-element.
    ///
    /// Returns `false` when the document holds no element at all.
    pub fn advance_to_root(&mut self) -> Result<bool, StreamError> {
        if self.kind != EventKind::BeforeDocument {
            return Err(StreamError::Misplaced {
                operation: "advance_to_root",
            });
        }
        loop {
            match self.pull(false)? {
                Pulled::Start => return Ok(true),
                Pulled::Eof => return Ok(false),
                Pulled::End | Pulled::Text(_) => {}
            }
        }
    }

    /// Advances to the next child start-element of the enclosing element.
    ///
    /// The enclosing element is the current one when the cursor sits on a
    /// start-element, or the parent of the current one when it sits on an
    /// end-element. Returns `false`, positioned on the enclosing element's
    /// end-element, once there are no more children. At document level it
    /// returns `false` at the end of the document.
    pub fn next_child(&mut self) -> Result<bool, StreamError> {
        let parent = match self.kind {
            EventKind::StartElement => self.depth,
            EventKind::EndElement => self.depth - 1,
            EventKind::BeforeDocument => 0,
            EventKind::EndDocument => return Ok(false),
        };

        loop {
            match self.pull(false)? {
                Pulled::Start if self.depth == parent + 1 => return Ok(true),
                // Only reachable if a caller left a child half-read
                Pulled::Start => self.skip_subtree()?,
                Pulled::End if self.depth == parent => return Ok(false),
                Pulled::End | Pulled::Text(_) => {}
                Pulled::Eof => return Ok(false),
            }
        }
    }

    /// Reads the text content of the current element and its descendants.
    ///
    /// Text and CDATA are concatenated in document order, markup is dropped,
    /// and the result is trimmed. Leaves the cursor on the element's
    /// end-element.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Misplaced`] unless positioned on a
    /// start-element, so a second call on the same element is caught.
    pub fn element_text(&mut self) -> Result<Option<String>, StreamError> {
        let target = self.expect_start("element_text")?;
        let mut text = String::new();

        loop {
            match self.pull(true)? {
                Pulled::Text(chunk) => text.push_str(&chunk),
                Pulled::End if self.depth == target => break,
                Pulled::Start | Pulled::End => {}
                Pulled::Eof => return Err(self.unexpected_end()),
            }
        }

        let trimmed = text.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    /// Consumes the current element through its matching end-element.
    pub fn skip_subtree(&mut self) -> Result<(), StreamError> {
        let target = self.expect_start("skip_subtree")?;
        loop {
            match self.pull(false)? {
                Pulled::End if self.depth == target => return Ok(()),
                Pulled::Eof => return Err(self.unexpected_end()),
                _ => {}
            }
        }
    }

    /// Consumes the current element like [`skip_subtree`](Self::skip_subtree)
    /// and returns an approximate XML rendering of it.
    pub fn serialize_subtree(&mut self) -> Result<String, StreamError> {
        let target = self.expect_start("serialize_subtree")?;
        let mut out = String::new();
        self.write_start_tag(&mut out);

        loop {
            match self.pull(true)? {
                Pulled::Start => self.write_start_tag(&mut out),
                Pulled::Text(text) => out.push_str(&escape(text.as_str())),
                Pulled::End => {
                    let _ = write!(out, "</{}>", self.qualified_name);
                    if self.depth == target {
                        return Ok(out);
                    }
                }
                Pulled::Eof => return Err(self.unexpected_end()),
            }
        }
    }

    fn expect_start(&self, operation: &'static str) -> Result<usize, StreamError> {
        if self.kind == EventKind::StartElement {
            Ok(self.depth)
        } else {
            Err(StreamError::Misplaced { operation })
        }
    }

    fn unexpected_end(&self) -> StreamError {
        StreamError::UnexpectedEnd {
            element: self.stack.last().cloned().unwrap_or_default(),
        }
    }

    fn write_start_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.qualified_name);
        for attr in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", attr.qualified_name, escape(attr.value.as_str()));
        }
        out.push('>');
    }

    /// Reads the next event that matters and updates the position.
    ///
    /// Text is only decoded when `want_text` is set.
    fn pull(&mut self, want_text: bool) -> Result<Pulled, StreamError> {
        loop {
            let raw = self.read_raw(want_text)?;
            match raw {
                Some(RawEvent::Start {
                    qualified,
                    local,
                    attributes,
                }) => {
                    if self.stack.len() >= MAX_DEPTH {
                        return Err(StreamError::TooDeep(MAX_DEPTH));
                    }
                    self.stack.push(qualified.clone());
                    self.depth = self.stack.len();
                    self.kind = EventKind::StartElement;
                    self.qualified_name = qualified;
                    self.local_name = local;
                    self.attributes = attributes;
                    return Ok(Pulled::Start);
                }
                Some(RawEvent::End { qualified, local }) => {
                    self.depth = self.stack.len();
                    self.stack.pop();
                    self.kind = EventKind::EndElement;
                    self.qualified_name = qualified;
                    self.local_name = local;
                    self.attributes.clear();
                    return Ok(Pulled::End);
                }
                Some(RawEvent::Text(text)) => return Ok(Pulled::Text(text)),
                Some(RawEvent::Doctype(doctype)) => self.doctype = Some(doctype.trim().to_string()),
                Some(RawEvent::Eof) => {
                    if !self.stack.is_empty() {
                        return Err(self.unexpected_end());
                    }
                    self.kind = EventKind::EndDocument;
                    self.depth = 0;
                    self.namespace = None;
                    self.local_name.clear();
                    self.qualified_name.clear();
                    self.attributes.clear();
                    return Ok(Pulled::Eof);
                }
                None => {}
            }
        }
    }

    /// One tokenizer read, copied out of the shared buffer.
    ///
    /// Sets the namespace of element events. Returns `None` for events the
    /// cursor ignores.
    fn read_raw(&mut self, want_text: bool) -> Result<Option<RawEvent>, StreamError> {
        self.buf.clear();
        let decoder = self.reader.decoder();
        let resolver = self.resolver;

        let (resolved, event) = self
            .reader
            .read_resolved_event_into(&mut self.buf)
            .map_err(|e| StreamError::Xml(e.to_string()))?;
        let namespace = owned_namespace(resolved, decoder)?;

        let raw = match event {
            Event::Start(start) => RawEvent::Start {
                qualified: decode(decoder, start.name().as_ref())?,
                local: decode(decoder, start.local_name().as_ref())?,
                attributes: owned_attributes(&start, decoder, resolver),
            },
            Event::End(end) => RawEvent::End {
                qualified: decode(decoder, end.name().as_ref())?,
                local: decode(decoder, end.local_name().as_ref())?,
            },
            Event::Text(text) if want_text => RawEvent::Text(unescape_text(&text, decoder, resolver)?),
            Event::CData(cdata) if want_text => RawEvent::Text(decode(decoder, &cdata)?),
            Event::DocType(doctype) => RawEvent::Doctype(decode(decoder, &doctype)?),
            Event::Eof => RawEvent::Eof,
            _ => return Ok(None),
        };

        if matches!(raw, RawEvent::Start { .. } | RawEvent::End { .. }) {
            self.namespace = namespace;
        }
        Ok(Some(raw))
    }
}

impl<R> StreamCursor<'_, R> {
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Namespace of the current element.
    ///
    /// The bound URI when the prefix is declared; the bare prefix itself when
    /// it is not, so feeds that forget `xmlns:itunes` still resolve.
    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Whether the element name was written with a prefix (`itunes:image`
    /// rather than `image`).
    pub fn is_prefixed(&self) -> bool {
        self.qualified_name.len() != self.local_name.len()
    }

    /// Looks up an attribute of the current start-element.
    ///
    /// Matches the qualified name first, then the local name. The value is
    /// trimmed; an empty value counts as absent.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        let found = self
            .attributes
            .iter()
            .find(|attr| attr.qualified_name == name)
            .or_else(|| {
                self.attributes
                    .iter()
                    .filter(|attr| !attr.is_namespace_declaration())
                    .find(|attr| attr.local_name == name)
            })?;

        let value = found.value.trim();
        (!value.is_empty()).then_some(value)
    }

    /// Qualified names of the current element's attributes, without
    /// namespace declarations.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.attributes
            .iter()
            .filter(|attr| !attr.is_namespace_declaration())
            .map(|attr| attr.qualified_name.as_str())
    }

    /// Body of the `<!DOCTYPE ...>` seen so far, if any.
    pub fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }
}

fn decode(decoder: Decoder, bytes: &[u8]) -> Result<String, StreamError> {
    decoder
        .decode(bytes)
        .map(Cow::into_owned)
        .map_err(|e| StreamError::Encoding(e.to_string()))
}

fn owned_namespace(resolved: ResolveResult<'_>, decoder: Decoder) -> Result<Option<String>, StreamError> {
    let uri = match resolved {
        ResolveResult::Bound(ns) => decode(decoder, ns.into_inner())?,
        ResolveResult::Unknown(prefix) => decode(decoder, &prefix)?,
        ResolveResult::Unbound => return Ok(None),
    };
    let uri = uri.trim();
    Ok((!uri.is_empty()).then(|| uri.to_string()))
}

fn unescape_text(
    text: &BytesText<'_>,
    decoder: Decoder,
    resolver: &dyn EntityResolver,
) -> Result<String, StreamError> {
    match text.unescape_with(|entity| resolver.resolve_entity(entity)) {
        Ok(unescaped) => Ok(unescaped.into_owned()),
        Err(err) => {
            tracing::debug!(error = %err, "Keeping text with malformed escape as written");
            decode(decoder, text)
        }
    }
}

fn owned_attributes(
    start: &BytesStart<'_>,
    decoder: Decoder,
    resolver: &dyn EntityResolver,
) -> Vec<XmlAttribute> {
    let mut attributes = Vec::new();

    for attr_result in start.attributes().with_checks(false) {
        let attr = match attr_result {
            Ok(attr) => attr,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed attribute");
                continue;
            }
        };

        let Ok(qualified_name) = decode(decoder, attr.key.as_ref()) else {
            continue;
        };
        let value = match attr.decode_and_unescape_value_with(decoder, |entity| {
            resolver.resolve_entity(entity)
        }) {
            Ok(value) => value.into_owned(),
            Err(_) => match decode(decoder, &attr.value) {
                Ok(value) => value,
                Err(_) => continue,
            },
        };

        let local_name = qualified_name
            .split_once(':')
            .map_or(qualified_name.as_str(), |(_, local)| local)
            .to_string();
        attributes.push(XmlAttribute {
            qualified_name,
            local_name,
            value,
        });
    }

    attributes
}

/// Snapshot of the cursor position, taken around handler and hook calls.
///
/// Only compiled into debug builds by the dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorState {
    kind: EventKind,
    depth: usize,
    namespace: Option<String>,
    local_name: String,
}

impl CursorState {
    pub fn capture<R>(cursor: &StreamCursor<'_, R>) -> Self {
        Self {
            kind: cursor.kind,
            depth: cursor.depth,
            namespace: cursor.namespace.clone(),
            local_name: cursor.local_name.clone(),
        }
    }

    /// Panics if the cursor moved at all.
    pub fn assert_unchanged<R>(&self, cursor: &StreamCursor<'_, R>, caller: &str) {
        let now = Self::capture(cursor);
        assert_eq!(self, &now, "{caller} moved the cursor");
    }

    /// Panics unless the cursor sits on the end-element matching the
    /// start-element this snapshot was taken on.
    pub fn assert_closed<R>(&self, cursor: &StreamCursor<'_, R>, caller: &str) {
        let now = Self::capture(cursor);
        let expected = Self {
            kind: EventKind::EndElement,
            ..self.clone()
        };
        assert_eq!(
            expected, now,
            "{caller} did not leave the cursor on the element's end"
        );
    }
}
