//! Integration tests for Atom 1.0 and 0.3 documents.

use pretty_assertions::assert_eq;

use podfeed::model::{Category, FeedKind, Person, Temporal};
use podfeed::parse_str;

const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd">
  <title type="text">  Atom Cast  </title>
  <subtitle>Short and sweet</subtitle>
  <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
  <updated>2003-12-13T18:30:02Z</updated>
  <link rel="self" href="https://example.org/feed.atom"/>
  <link href="https://example.org/"/>
  <author>
    <name>John Doe</name>
    <email>john@example.org</email>
    <uri>https://example.org/john</uri>
  </author>
  <category term="technology" scheme="https://example.org/tags" label="Technology"/>
  <itunes:category text="Technology"/>
  <entry>
    <title>Atom-Powered Robots Run Amok</title>
    <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>
    <updated>2003-12-13T18:30:02Z</updated>
    <published>2003-12-13</published>
    <summary>Some text.</summary>
    <link href="https://example.org/2003/12/13/atom03"/>
    <link rel="enclosure" type="audio/mpeg" length="1337" href="https://example.org/robots.mp3"/>
    <content type="html">&lt;p&gt;Robots!&lt;/p&gt;</content>
  </entry>
  <entry>
    <title>Second</title>
    <id>urn:uuid:2</id>
  </entry>
</feed>
"#;

#[test]
fn test_feed_fields() {
    let feed = parse_str(ATOM).unwrap();

    assert_eq!(feed.kind, FeedKind::Atom);
    assert_eq!(feed.title.as_deref(), Some("Atom Cast"));
    assert_eq!(feed.subtitle.as_deref(), Some("Short and sweet"));
    assert_eq!(
        feed.id.as_deref(),
        Some("urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6")
    );
    assert_eq!(feed.link.as_deref(), Some("https://example.org/"));
    assert_eq!(feed.links.len(), 2);
    assert_eq!(
        feed.authors,
        vec![Person {
            name: Some("John Doe".to_string()),
            email: Some("john@example.org".to_string()),
            uri: Some("https://example.org/john".to_string()),
            ..Person::default()
        }]
    );
    assert!(matches!(feed.updated, Some(Temporal::Zoned(_))));
}

#[test]
fn test_categories_from_term_and_itunes() {
    let feed = parse_str(ATOM).unwrap();
    assert_eq!(
        feed.categories,
        vec![
            Category {
                name: "technology".to_string(),
                scheme: Some("https://example.org/tags".to_string()),
                label: Some("Technology".to_string()),
                subcategories: Vec::new(),
            },
            Category::new("Technology"),
        ]
    );
}

#[test]
fn test_entries() {
    let feed = parse_str(ATOM).unwrap();
    assert_eq!(feed.items.len(), 2);

    let entry = &feed.items[0];
    assert_eq!(entry.title.as_deref(), Some("Atom-Powered Robots Run Amok"));
    assert_eq!(
        entry.guid.as_deref(),
        Some("urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a")
    );
    assert_eq!(
        entry.link.as_deref(),
        Some("https://example.org/2003/12/13/atom03")
    );
    assert_eq!(entry.summary.as_deref(), Some("Some text."));
    assert_eq!(entry.content.as_deref(), Some("<p>Robots!</p>"));
    assert!(matches!(entry.published, Some(Temporal::Date(_))));

    let enclosure = entry.primary_enclosure().unwrap();
    assert_eq!(enclosure.url, "https://example.org/robots.mp3");
    assert_eq!(enclosure.length, Some(1337));
    assert!(enclosure.is_audio());

    assert_eq!(feed.items[1].guid.as_deref(), Some("urn:uuid:2"));
}

#[test]
fn test_atom_03_names() {
    let xml = r#"<feed version="0.3" xmlns="http://purl.org/atom/ns#">
      <title>Old Atom</title>
      <tagline>From 2004</tagline>
      <modified>2004-01-01T00:00:00Z</modified>
      <entry><title>E</title><issued>2004-01-01T00:00:00Z</issued></entry>
    </feed>"#;
    let feed = parse_str(xml).unwrap();
    assert_eq!(feed.title.as_deref(), Some("Old Atom"));
    assert_eq!(feed.subtitle.as_deref(), Some("From 2004"));
    assert!(feed.updated.is_some());
    assert!(feed.items[0].published.is_some());
}

#[test]
fn test_title_is_atom_title() {
    for raw in ["X", " X ", "\nX\n"] {
        let xml = format!(r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>{raw}</title></feed>"#);
        assert_eq!(parse_str(&xml).unwrap().title.as_deref(), Some("X"));
    }
}

#[test]
fn test_parsing_is_idempotent() {
    assert_eq!(parse_str(ATOM).unwrap(), parse_str(ATOM).unwrap());
}

#[test]
fn test_draft_namespace_still_atom() {
    let xml = r#"<feed xmlns="http://purl.org/atom/ns#draft-ietf-atompub-format-09">
      <title>Draft</title>
      <entry><title>E</title><id>urn:e</id></entry>
    </feed>"#;
    let feed = parse_str(xml).unwrap();
    assert_eq!(feed.kind, FeedKind::Atom);
    assert_eq!(feed.title.as_deref(), Some("Draft"));
    assert_eq!(feed.items.len(), 1);
    assert_eq!(feed.items[0].guid.as_deref(), Some("urn:e"));
}
