//! Lenient streaming parser for RSS 2.0 and Atom podcast feeds.
//!
//! Feeds in the wild are rarely valid: dates come in dozens of shapes,
//! namespaces are misspelled, HTML entities appear undeclared and items
//! sit outside their channel. The parser walks the document once, maps the
//! elements it knows and skips the rest.
//!
//! ```
//! let xml = r#"<rss xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd">
//!   <channel>
//!     <title>  Example Show </title>
//!     <item>
//!       <title>Episode 1</title>
//!       <enclosure url="http://example.com/1.mp3" length="123" type="audio/mpeg"/>
//!       <itunes:duration>1:02:03</itunes:duration>
//!     </item>
//!   </channel>
//! </rss>"#;
//!
//! let feed = podfeed::parse_str(xml).unwrap();
//! assert_eq!(feed.title.as_deref(), Some("Example Show"));
//! assert_eq!(feed.items[0].enclosures[0].length, Some(123));
//! assert_eq!(feed.items[0].duration.map(|d| d.as_secs()), Some(3723));
//! ```

pub mod config;
pub mod feed;
pub mod lenient;
pub mod model;
pub mod util;

use std::io::BufRead;

pub use feed::{FeedParser, NotAFeed, ParseError};
pub use model::{Feed, Item};

/// Parses a feed held in memory with the default [`FeedParser`].
pub fn parse_str(xml: &str) -> Result<Feed, ParseError> {
    FeedParser::new().parse_str(xml)
}

/// Parses a feed from a buffered reader with the default [`FeedParser`].
pub fn parse_reader<R: BufRead>(input: R) -> Result<Feed, ParseError> {
    FeedParser::new().parse(input)
}
