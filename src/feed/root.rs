//! Document-level entry point.
//!
//! Decides which format the document is by looking at its root element,
//! then hands the channel to the dispatch loop.
//!
//! # Example
//!
//! ```
//! use podfeed::feed::FeedParser;
//!
//! let xml = r#"<rss version="2.0"><channel><title>Show</title>
//!     <item><title>Pilot</title></item></channel></rss>"#;
//! let feed = FeedParser::new().parse_str(xml).unwrap();
//! assert_eq!(feed.title.as_deref(), Some("Show"));
//! assert_eq!(feed.items.len(), 1);
//! ```

use std::io::BufRead;
use thiserror::Error;

use super::cursor::{StreamCursor, StreamError};
use super::diagnostics::{Diagnostics, ElementFilter, NoDiagnostics, NoFilter};
use super::dispatch::Dispatcher;
use super::entities::{DoctypeVerdict, EntityResolver, SafeEntityResolver};
use super::namespace::Namespace;
use super::registry::NamespaceRegistry;
use crate::model::{Feed, FeedKind};

/// Why a well-formed document is still not a feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotAFeed {
    #[error("document is an HTML page")]
    Html,

    #[error("unexpected root element <{0}>")]
    UnexpectedRoot(String),

    #[error("<rss> has no <channel>")]
    MissingChannel,

    #[error("document has no root element")]
    Empty,
}

/// Errors returned by [`FeedParser`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("not a feed: {0}")]
    NotAFeed(#[from] NotAFeed),

    #[error("malformed XML: {0}")]
    MalformedXml(#[from] StreamError),
}

enum RootState {
    AwaitingRoot,
    InRss,
    InAtom,
    Done(Feed),
    Failed(ParseError),
}

impl From<Result<RootState, StreamError>> for RootState {
    fn from(result: Result<RootState, StreamError>) -> Self {
        result.unwrap_or_else(|err| RootState::Failed(err.into()))
    }
}

struct RootDispatcher<'p, R> {
    cursor: StreamCursor<'p, R>,
    registry: &'p NamespaceRegistry,
    resolver: &'p dyn EntityResolver,
    filter: &'p dyn ElementFilter,
    diagnostics: &'p mut dyn Diagnostics,
}

impl<'p, R: BufRead> RootDispatcher<'p, R> {
    fn run(mut self) -> Result<Feed, ParseError> {
        let mut state = RootState::AwaitingRoot;
        loop {
            state = match state {
                RootState::AwaitingRoot => self.await_root().into(),
                RootState::InRss => self.in_rss().into(),
                RootState::InAtom => self.in_atom().into(),
                RootState::Done(feed) => return Ok(feed),
                RootState::Failed(err) => return Err(err),
            };
        }
    }

    fn dispatcher(&mut self, root: Namespace) -> Dispatcher<'_, 'p, R> {
        Dispatcher::new(
            &mut self.cursor,
            self.registry,
            self.filter,
            &mut *self.diagnostics,
            root,
        )
    }

    fn is_html_doctype(&self) -> bool {
        self.cursor
            .doctype()
            .is_some_and(|doctype| self.resolver.classify_doctype(doctype) == DoctypeVerdict::Html)
    }

    fn await_root(&mut self) -> Result<RootState, StreamError> {
        if !self.cursor.advance_to_root()? {
            let reason = if self.is_html_doctype() {
                NotAFeed::Html
            } else {
                NotAFeed::Empty
            };
            return Ok(RootState::Failed(reason.into()));
        }

        if self.is_html_doctype() {
            tracing::debug!(doctype = ?self.cursor.doctype(), "HTML document type");
            return Ok(RootState::Failed(NotAFeed::Html.into()));
        }

        let state = match self.cursor.local_name() {
            "rss" => RootState::InRss,
            "feed" => RootState::InAtom,
            name if name.eq_ignore_ascii_case("html") => RootState::Failed(NotAFeed::Html.into()),
            _ => {
                let root = self.cursor.qualified_name().to_string();
                RootState::Failed(NotAFeed::UnexpectedRoot(root).into())
            }
        };
        Ok(state)
    }

    fn in_rss(&mut self) -> Result<RootState, StreamError> {
        while self.cursor.next_child()? {
            if self.cursor.local_name() != "channel" {
                tracing::debug!(element = %self.cursor.qualified_name(), "Skipping element outside <channel>");
                self.cursor.skip_subtree()?;
                continue;
            }

            let mut feed = Feed::new(FeedKind::Rss);
            self.dispatcher(Namespace::Rss).feed_level(&mut feed)?;
            self.after_channel(&mut feed);
            return Ok(RootState::Done(feed));
        }
        Ok(RootState::Failed(NotAFeed::MissingChannel.into()))
    }

    /// Collects `<item>`s misplaced after `</channel>`. The channel is
    /// complete at this point, so a broken tail only costs those items.
    fn after_channel(&mut self, feed: &mut Feed) {
        if let Err(err) = self.stray_items(feed) {
            tracing::warn!(error = %err, "Ignoring malformed content after </channel>");
        }
    }

    fn stray_items(&mut self, feed: &mut Feed) -> Result<(), StreamError> {
        while self.cursor.next_child()? {
            if self.cursor.local_name() == "item" {
                let item = self.dispatcher(Namespace::Rss).item_level()?;
                tracing::debug!(title = ?item.title, "Appending item found after </channel>");
                feed.items.push(item);
            } else {
                self.cursor.skip_subtree()?;
            }
        }
        Ok(())
    }

    fn in_atom(&mut self) -> Result<RootState, StreamError> {
        let mut feed = Feed::new(FeedKind::Atom);
        self.dispatcher(Namespace::Atom).feed_level(&mut feed)?;
        Ok(RootState::Done(feed))
    }
}

/// Parses RSS 2.0 and Atom documents into a [`Feed`].
///
/// The parser itself is cheap to build and holds only shared references;
/// each call to [`parse`](Self::parse) gets its own tokenizer.
#[derive(Clone, Copy)]
pub struct FeedParser<'a> {
    registry: &'a NamespaceRegistry,
    resolver: &'a dyn EntityResolver,
    filter: &'a dyn ElementFilter,
}

impl FeedParser<'static> {
    /// A parser with the standard registry, safe entity handling and no
    /// filter.
    pub fn new() -> Self {
        Self {
            registry: NamespaceRegistry::standard(),
            resolver: &SafeEntityResolver,
            filter: &NoFilter,
        }
    }
}

impl Default for FeedParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FeedParser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedParser")
            .field("namespaces", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl<'a> FeedParser<'a> {
    pub fn with_filter(self, filter: &'a dyn ElementFilter) -> Self {
        Self { filter, ..self }
    }

    pub fn with_resolver(self, resolver: &'a dyn EntityResolver) -> Self {
        Self { resolver, ..self }
    }

    pub fn with_registry(self, registry: &'a NamespaceRegistry) -> Self {
        Self { registry, ..self }
    }

    /// Parses one document.
    ///
    /// # Errors
    ///
    /// [`ParseError::NotAFeed`] when the root element is not `<rss>` or
    /// `<feed>` (or an RSS document lacks its channel), and
    /// [`ParseError::MalformedXml`] when the byte stream breaks before the
    /// feed is complete. No partial feed is returned in either case.
    pub fn parse<R: BufRead>(&self, input: R) -> Result<Feed, ParseError> {
        self.parse_with(input, &mut NoDiagnostics)
    }

    /// Parses one document, reporting unmapped elements to `diagnostics`.
    pub fn parse_with<R: BufRead>(
        &self,
        input: R,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<Feed, ParseError> {
        let root = RootDispatcher {
            cursor: StreamCursor::new(input, self.resolver),
            registry: self.registry,
            resolver: self.resolver,
            filter: self.filter,
            diagnostics,
        };

        let result = root.run();
        match &result {
            Ok(feed) => tracing::debug!(kind = ?feed.kind, items = feed.items.len(), "Parsed feed"),
            Err(err) => tracing::debug!(error = %err, "Feed rejected"),
        }
        result
    }

    pub fn parse_str(&self, xml: &str) -> Result<Feed, ParseError> {
        self.parse(xml.as_bytes())
    }
}
