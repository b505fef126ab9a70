//! Integration tests for namespace dispatch, diagnostics, filtering and
//! document rejection.

use pretty_assertions::assert_eq;

use podfeed::config::{Config, SkipElement};
use podfeed::feed::{
    ElementStats, FeedParser, Namespace, NamespaceRegistry, NotAFeed, ParseError, ParseLevel,
};
use podfeed::model::Category;
use podfeed::parse_str;

#[test]
fn test_nested_itunes_category() {
    let xml = r#"<rss xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd"><channel>
      <itunes:category text="Arts">
        <itunes:category text="Games"/>
      </itunes:category>
    </channel></rss>"#;
    let feed = parse_str(xml).unwrap();
    assert_eq!(
        feed.categories,
        vec![Category {
            subcategories: vec![Category::new("Games")],
            ..Category::new("Arts")
        }]
    );
}

#[test]
fn test_unknown_namespace_reported_exactly_once() {
    let xml = r#"<rss xmlns:acme="http://acme.example/ns/1.0"><channel>
      <title>Known</title>
      <acme:tracking id="42"><acme:pixel/></acme:tracking>
      <description>Still parsed</description>
      <item><title>Episode</title></item>
    </channel></rss>"#;

    let mut stats = ElementStats::new();
    let feed = FeedParser::new()
        .parse_with(xml.as_bytes(), &mut stats)
        .unwrap();

    assert_eq!(feed.title.as_deref(), Some("Known"));
    assert_eq!(feed.description.as_deref(), Some("Still parsed"));
    assert_eq!(feed.items.len(), 1);

    assert_eq!(stats.unknown_namespaces.len(), 1);
    let (element, count) = stats.unknown_namespaces.iter().next().unwrap();
    assert_eq!(*count, 1);
    assert_eq!(element.namespace.as_deref(), Some("http://acme.example/ns/1.0"));
    assert_eq!(element.local_name, "tracking");
    assert_eq!(element.level, ParseLevel::Feed);
    assert!(element.attributes.contains("id"));
}

#[test]
fn test_misspelled_namespace_uri_resolves() {
    let xml = r#"<rss xmlns:itunes="HTTP://WWW.ITUNES.COM/DTDS/PODCAST-1.0.DTD"><channel>
      <itunes:explicit>true</itunes:explicit>
    </channel></rss>"#;
    assert_eq!(parse_str(xml).unwrap().explicit, Some(true));
}

#[test]
fn test_undeclared_prefix_resolves_by_name() {
    // No xmlns:itunes declaration at all
    let xml = "<rss><channel><item><itunes:duration>02:03</itunes:duration></item></channel></rss>";
    let feed = parse_str(xml).unwrap();
    assert_eq!(feed.items[0].duration.map(|d| d.as_millis()), Some(123_000));
}

#[test]
fn test_custom_alias() {
    let mut registry = NamespaceRegistry::with_namespaces(&Namespace::ALL).unwrap();
    registry
        .alias("http://example.com/our-itunes", Namespace::Itunes)
        .unwrap();

    let xml = r#"<rss xmlns:it="http://example.com/our-itunes"><channel><it:block>yes</it:block></channel></rss>"#;
    let feed = FeedParser::new().with_registry(&registry).parse_str(xml).unwrap();
    assert_eq!(feed.block, Some(true));
}

#[test]
fn test_html_rejected() {
    let page = "<html><head><title>Not a feed</title></head><body><p>Hi</p></body></html>";
    assert_eq!(
        parse_str(page).unwrap_err(),
        ParseError::NotAFeed(NotAFeed::Html)
    );
}

#[test]
fn test_xhtml_doctype_rejected() {
    let page = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml"><body/></html>"#;
    assert_eq!(
        parse_str(page).unwrap_err(),
        ParseError::NotAFeed(NotAFeed::Html)
    );
}

#[test]
fn test_custom_entity_is_never_expanded() {
    let xml = r#"<?xml version="1.0"?>
<!DOCTYPE rss [ <!ENTITY xxe SYSTEM "file:///etc/passwd"> ]>
<rss><channel><title>Hello &xxe;World</title></channel></rss>"#;
    let feed = parse_str(xml).unwrap();
    assert_eq!(feed.title.as_deref(), Some("Hello World"));
}

#[test]
fn test_config_filter_skips_elements() {
    let config = Config {
        skip_namespaces: vec!["http://search.yahoo.com/mrss/".to_string()],
        skip_elements: vec![SkipElement {
            namespace: None,
            name: "description".to_string(),
        }],
        ..Config::default()
    };
    let filter = config.filter();

    let xml = r#"<rss xmlns:media="http://search.yahoo.com/mrss/"><channel>
      <title>T</title>
      <description>skipped</description>
      <item>
        <media:content url="http://x/v.mp4" type="video/mp4"/>
        <description>also skipped</description>
      </item>
    </channel></rss>"#;

    let mut stats = ElementStats::new();
    let feed = FeedParser::new()
        .with_filter(&filter)
        .parse_with(xml.as_bytes(), &mut stats)
        .unwrap();

    assert_eq!(feed.title.as_deref(), Some("T"));
    assert_eq!(feed.description, None);
    assert!(feed.items[0].media.is_empty());
    assert_eq!(feed.items[0].description, None);
    assert!(stats.is_empty());
}

#[test]
fn test_podcast_namespace() {
    let xml = r#"<rss xmlns:podcast="https://podcastindex.org/namespace/1.0"><channel>
      <podcast:guid>917393e3-1b1e-5cef-ace4-edaa54e1f810</podcast:guid>
      <podcast:locked owner="owner@example.com">yes</podcast:locked>
      <podcast:funding url="https://example.com/support">Support us</podcast:funding>
      <item>
        <podcast:transcript url="https://example.com/ep1.srt" type="application/srt"/>
        <podcast:season>2</podcast:season>
        <podcast:person role="guest" href="https://example.com/guest">Guest Person</podcast:person>
      </item>
    </channel></rss>"#;
    let feed = parse_str(xml).unwrap();

    assert_eq!(
        feed.podcast_guid.as_deref(),
        Some("917393e3-1b1e-5cef-ace4-edaa54e1f810")
    );
    assert_eq!(feed.locked, Some(true));
    assert_eq!(feed.funding[0].url, "https://example.com/support");

    let item = &feed.items[0];
    assert_eq!(item.transcripts[0].mime_type.as_deref(), Some("application/srt"));
    assert_eq!(item.season, Some(2));
    assert_eq!(item.credits[0].name.as_deref(), Some("Guest Person"));
    assert_eq!(item.credits[0].role.as_deref(), Some("guest"));
}

#[test]
fn test_stats_merge_across_documents() {
    let mut totals = ElementStats::new();
    for _ in 0..2 {
        let mut stats = ElementStats::new();
        FeedParser::new()
            .parse_with(
                "<rss><channel><cloud/><item><foo/></item></channel></rss>".as_bytes(),
                &mut stats,
            )
            .unwrap();
        totals.merge(stats);
    }
    assert_eq!(totals.feeds, 2);
    assert_eq!(totals.items, 2);
    assert_eq!(totals.unmapped_elements.values().sum::<usize>(), 4);
    assert_eq!(totals.unmapped_elements.len(), 2);
}
