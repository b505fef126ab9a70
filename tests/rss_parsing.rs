//! Integration tests for RSS 2.0 documents, end to end through the public API.
//!
//! Fixtures are inline so each test shows exactly the markup it relies on.

use pretty_assertions::assert_eq;
use std::time::Duration;

use podfeed::feed::FeedParser;
use podfeed::model::{Enclosure, FeedKind, Temporal};
use podfeed::{parse_reader, parse_str, NotAFeed, ParseError};

const PODCAST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"
     xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd"
     xmlns:content="http://purl.org/rss/1.0/modules/content/"
     xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>
        The Example Show
    </title>
    <link>https://example.com/</link>
    <atom:link href="https://example.com/feed.xml" rel="self" type="application/rss+xml"/>
    <description>A show about examples &amp; tests.</description>
    <language>en-us</language>
    <pubDate>Wed, 02 Oct 2002 15:00:00 +0200</pubDate>
    <ttl>60</ttl>
    <itunes:explicit>no</itunes:explicit>
    <itunes:owner>
      <itunes:name>Jane Host</itunes:name>
      <itunes:email>jane@example.com</itunes:email>
    </itunes:owner>
    <item>
      <title>Episode 2: Deeper</title>
      <guid isPermaLink="false">ep-2</guid>
      <pubDate>Sun, 02 Oct 2002 15:00:00 +0200</pubDate>
      <enclosure url="http://x/a.mp3" length="123" type="audio/mpeg"/>
      <itunes:duration>1:02:03</itunes:duration>
      <itunes:episode>2</itunes:episode>
      <content:encoded><![CDATA[<p>Show notes</p>]]></content:encoded>
    </item>
    <item>
      <title>Episode 1</title>
      <guid>https://example.com/1</guid>
      <enclosure url="http://x/b.mp3" length="1,024" type="audio/mpeg"/>
      <itunes:duration>26 minutes</itunes:duration>
    </item>
  </channel>
</rss>
"#;

#[test]
fn test_channel_fields() {
    let feed = parse_str(PODCAST).unwrap();

    assert_eq!(feed.kind, FeedKind::Rss);
    assert_eq!(feed.title.as_deref(), Some("The Example Show"));
    assert_eq!(feed.link.as_deref(), Some("https://example.com/"));
    assert_eq!(
        feed.description.as_deref(),
        Some("A show about examples & tests.")
    );
    assert_eq!(feed.language.as_deref(), Some("en-us"));
    assert_eq!(feed.ttl, Some(60));
    assert_eq!(feed.explicit, Some(false));
    assert_eq!(feed.links.len(), 2);
    assert!(feed
        .links
        .iter()
        .any(|l| l.rel.as_deref() == Some("self") && l.href == "https://example.com/feed.xml"));

    let owner = feed.owner.as_ref().unwrap();
    assert_eq!(owner.name.as_deref(), Some("Jane Host"));
    assert_eq!(owner.email.as_deref(), Some("jane@example.com"));
}

#[test]
fn test_title_is_trimmed() {
    for raw in ["X", "  X", "X\n", "\n\t X \n"] {
        let xml = format!("<rss><channel><title>{raw}</title></channel></rss>");
        assert_eq!(parse_str(&xml).unwrap().title.as_deref(), Some("X"), "{raw:?}");
    }
}

#[test]
fn test_enclosure() {
    let feed = parse_str(PODCAST).unwrap();
    assert_eq!(
        feed.items[0].enclosures,
        vec![Enclosure {
            url: "http://x/a.mp3".to_string(),
            length: Some(123),
            mime_type: Some("audio/mpeg".to_string()),
        }]
    );
    assert_eq!(feed.items[1].enclosures[0].length, Some(1024));
    assert_eq!(feed.audio_items().len(), 2);
}

#[test]
fn test_item_fields() {
    let feed = parse_str(PODCAST).unwrap();
    let first = &feed.items[0];

    assert_eq!(first.title.as_deref(), Some("Episode 2: Deeper"));
    assert_eq!(first.guid.as_deref(), Some("ep-2"));
    assert_eq!(first.guid_is_permalink, Some(false));
    assert_eq!(first.duration, Some(Duration::from_millis(3_723_000)));
    assert_eq!(first.episode, Some(2));
    assert_eq!(first.content.as_deref(), Some("<p>Show notes</p>"));

    assert_eq!(feed.items[1].duration, Some(Duration::from_secs(26 * 60)));
}

#[test]
fn test_wrong_weekday_still_dated() {
    let feed = parse_str(PODCAST).unwrap();
    let (Some(Temporal::Zoned(channel)), Some(Temporal::Zoned(item))) =
        (&feed.published, &feed.items[0].published)
    else {
        panic!("expected zoned dates");
    };
    assert_eq!(channel, item);
    assert_eq!(channel.to_rfc3339(), "2002-10-02T15:00:00+02:00");
}

#[test]
fn test_parsing_is_idempotent() {
    let first = parse_str(PODCAST).unwrap();
    let second = parse_reader(PODCAST.as_bytes()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_stray_items_after_channel_are_kept() {
    let xml = r#"<rss version="2.0">
      <channel><title>Show</title><item><title>Inside</title></item></channel>
      <item><title>Outside</title></item>
    </rss>"#;
    let feed = parse_str(xml).unwrap();
    let titles: Vec<_> = feed.items.iter().filter_map(|i| i.title.as_deref()).collect();
    assert_eq!(titles, vec!["Inside", "Outside"]);
}

#[test]
fn test_rss_without_channel() {
    assert_eq!(
        parse_str(r#"<rss version="2.0"></rss>"#).unwrap_err(),
        ParseError::NotAFeed(NotAFeed::MissingChannel)
    );
}

#[test]
fn test_unparseable_scalars_are_dropped() {
    let xml = r#"<rss xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd"><channel>
      <ttl>soon</ttl>
      <pubDate>the other day</pubDate>
      <item>
        <title>Kept</title>
        <itunes:duration>not a duration</itunes:duration>
        <enclosure url="http://x/c.mp3" length="big" type="audio/mpeg"/>
      </item>
    </channel></rss>"#;
    let feed = parse_str(xml).unwrap();
    assert_eq!(feed.ttl, None);
    assert_eq!(feed.published, None);
    assert_eq!(feed.items[0].title.as_deref(), Some("Kept"));
    assert_eq!(feed.items[0].duration, None);
    assert_eq!(feed.items[0].enclosures[0].length, None);
}

#[test]
fn test_html_entities_in_text() {
    let xml = "<rss><channel><title>Caf&eacute; &mdash; Talk</title></channel></rss>";
    let feed = parse_str(xml).unwrap();
    assert_eq!(feed.title.as_deref(), Some("Café — Talk"));
}

#[test]
fn test_rss_091_doctype_accepted() {
    let xml = r#"<!DOCTYPE rss PUBLIC "-//Netscape Communications//DTD RSS 0.91//EN" "http://my.netscape.com/publish/formats/rss-0.91.dtd">
<rss version="0.91"><channel><title>Old</title></channel></rss>"#;
    assert_eq!(parse_str(xml).unwrap().title.as_deref(), Some("Old"));
}

#[test]
fn test_parser_is_reusable() {
    let parser = FeedParser::new();
    let a = parser.parse_str("<rss><channel><title>A</title></channel></rss>").unwrap();
    let b = parser.parse_str("<rss><channel><title>B</title></channel></rss>").unwrap();
    assert_eq!(a.title.as_deref(), Some("A"));
    assert_eq!(b.title.as_deref(), Some("B"));
}

#[test]
fn test_unknown_default_namespace_still_rss() {
    let xml = r#"<rss xmlns="http://example.com/rss-ns"><channel>
      <title>X</title>
      <item><title>I</title></item>
    </channel></rss>"#;
    let feed = parse_str(xml).unwrap();
    assert_eq!(feed.title.as_deref(), Some("X"));
    assert_eq!(feed.items.len(), 1);
    assert_eq!(feed.items[0].title.as_deref(), Some("I"));
}
