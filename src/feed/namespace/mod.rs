//! Namespace field mappings.
//!
//! Every XML namespace the parser understands is one [`Namespace`] variant.
//! A variant maps child elements of `<channel>`/`<feed>` onto [`Feed`] fields
//! and child elements of `<item>`/`<entry>` onto [`Item`] fields.
//!
//! Handler contract: on [`Outcome::Consumed`] the cursor sits on the
//! element's end-element; on [`Outcome::Unmapped`] the cursor has not moved.

mod atom;
mod comments;
mod content;
mod dublin_core;
mod fields;
mod googleplay;
mod itunes;
mod media;
mod podcast;
mod rawvoice;
mod rss;
mod syndication;

use std::io::BufRead;

use super::cursor::{StreamCursor, StreamError};
use crate::model::{Feed, Item};

/// What a handler did with the element it was offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Mapped, cursor on the element's end-element.
    Consumed,
    /// No mapping at this level, cursor untouched.
    Unmapped,
}

/// The closed set of namespaces with field mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// RSS 2.0 core elements (also RSS 0.9x and 1.0)
    Rss,
    /// Atom 1.0 and 0.3
    Atom,
    Itunes,
    GooglePlay,
    /// Media RSS
    Media,
    /// Dublin Core elements and terms
    DublinCore,
    /// `content:encoded`
    Content,
    /// Podcast Index `podcast:` namespace
    Podcast,
    /// RSS Syndication module
    Syndication,
    Slash,
    /// Well-Formed Web comment API
    Wfw,
    /// RawVoice/Blubrry
    RawVoice,
}

impl Namespace {
    pub const ALL: [Namespace; 12] = [
        Namespace::Rss,
        Namespace::Atom,
        Namespace::Itunes,
        Namespace::GooglePlay,
        Namespace::Media,
        Namespace::DublinCore,
        Namespace::Content,
        Namespace::Podcast,
        Namespace::Syndication,
        Namespace::Slash,
        Namespace::Wfw,
        Namespace::RawVoice,
    ];

    /// Every string that identifies this namespace: URIs, variants seen in
    /// the wild, and the conventional prefix for feeds that never declare it.
    pub fn identities(self) -> &'static [&'static str] {
        match self {
            Namespace::Rss => &[
                "http://backend.userland.com/rss2",
                "http://blogs.law.harvard.edu/tech/rss",
                "http://purl.org/rss/1.0/",
                "http://my.netscape.com/rdf/simple/0.9/",
            ],
            Namespace::Atom => &[
                "http://www.w3.org/2005/Atom",
                "https://www.w3.org/2005/Atom",
                "http://purl.org/atom/ns#",
                "atom",
            ],
            Namespace::Itunes => &[
                "http://www.itunes.com/dtds/podcast-1.0.dtd",
                "https://www.itunes.com/dtds/podcast-1.0.dtd",
                "http://www.itunes.com/dtds/podcast-1.0.dtd/",
                "http://www.itunes.com/DTDs/Podcast-1.0.dtd",
                "itunes",
            ],
            Namespace::GooglePlay => &[
                "http://www.google.com/schemas/play-podcasts/1.0",
                "https://www.google.com/schemas/play-podcasts/1.0",
                "http://www.google.com/schemas/play-podcasts/1.0/play-podcasts.xsd",
                "googleplay",
            ],
            Namespace::Media => &[
                "http://search.yahoo.com/mrss/",
                "http://search.yahoo.com/mrss",
                "https://search.yahoo.com/mrss/",
                "http://tools.search.yahoo.com/mrss/",
                "media",
            ],
            Namespace::DublinCore => &[
                "http://purl.org/dc/elements/1.1/",
                "http://purl.org/dc/terms/",
                "dc",
                "dcterms",
            ],
            Namespace::Content => &["http://purl.org/rss/1.0/modules/content/", "content"],
            Namespace::Podcast => &[
                "https://podcastindex.org/namespace/1.0",
                "http://podcastindex.org/namespace/1.0",
                "https://github.com/Podcastindex-org/podcast-namespace/blob/main/docs/1.0.md",
                "podcast",
            ],
            Namespace::Syndication => &["http://purl.org/rss/1.0/modules/syndication/", "sy"],
            Namespace::Slash => &["http://purl.org/rss/1.0/modules/slash/", "slash"],
            Namespace::Wfw => &[
                "http://wellformedweb.org/CommentAPI/",
                "http://wellformedweb.org/commentapi/",
                "wfw",
            ],
            Namespace::RawVoice => &[
                "http://www.rawvoice.com/rawvoiceRssModule/",
                "https://blubrry.com/developer/rawvoice-rss/",
                "rawvoice",
            ],
        }
    }

    /// Short name used in logs and statistics.
    pub fn name(self) -> &'static str {
        match self {
            Namespace::Rss => "rss",
            Namespace::Atom => "atom",
            Namespace::Itunes => "itunes",
            Namespace::GooglePlay => "googleplay",
            Namespace::Media => "media",
            Namespace::DublinCore => "dc",
            Namespace::Content => "content",
            Namespace::Podcast => "podcast",
            Namespace::Syndication => "sy",
            Namespace::Slash => "slash",
            Namespace::Wfw => "wfw",
            Namespace::RawVoice => "rawvoice",
        }
    }

    /// The element that opens an item when this namespace is the root.
    pub fn item_tag(self) -> Option<&'static str> {
        match self {
            Namespace::Rss => Some("item"),
            Namespace::Atom => Some("entry"),
            _ => None,
        }
    }

    /// Maps one child element of `<channel>` or `<feed>`.
    pub fn feed_element<R: BufRead>(
        self,
        cursor: &mut StreamCursor<'_, R>,
        feed: &mut Feed,
    ) -> Result<Outcome, StreamError> {
        match self {
            Namespace::Rss => rss::feed_element(cursor, feed),
            Namespace::Atom => atom::feed_element(cursor, feed),
            Namespace::Itunes => itunes::feed_element(cursor, feed),
            Namespace::GooglePlay => googleplay::feed_element(cursor, feed),
            Namespace::Media => media::feed_element(cursor, feed),
            Namespace::DublinCore => dublin_core::feed_element(cursor, feed),
            Namespace::Podcast => podcast::feed_element(cursor, feed),
            Namespace::Syndication => syndication::feed_element(cursor, feed),
            Namespace::RawVoice => rawvoice::feed_element(cursor, feed),
            Namespace::Content | Namespace::Slash | Namespace::Wfw => Ok(Outcome::Unmapped),
        }
    }

    /// Maps one child element of `<item>` or `<entry>`.
    pub fn item_element<R: BufRead>(
        self,
        cursor: &mut StreamCursor<'_, R>,
        item: &mut Item,
    ) -> Result<Outcome, StreamError> {
        match self {
            Namespace::Rss => rss::item_element(cursor, item),
            Namespace::Atom => atom::item_element(cursor, item),
            Namespace::Itunes => itunes::item_element(cursor, item),
            Namespace::GooglePlay => googleplay::item_element(cursor, item),
            Namespace::Media => media::item_element(cursor, item),
            Namespace::DublinCore => dublin_core::item_element(cursor, item),
            Namespace::Content => content::item_element(cursor, item),
            Namespace::Podcast => podcast::item_element(cursor, item),
            Namespace::Slash => comments::slash_item_element(cursor, item),
            Namespace::Wfw => comments::wfw_item_element(cursor, item),
            Namespace::RawVoice => rawvoice::item_element(cursor, item),
            Namespace::Syndication => Ok(Outcome::Unmapped),
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
