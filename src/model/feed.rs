use serde::Serialize;
use std::time::Duration;

use super::{
    Category, Chapters, Enclosure, Funding, Image, Link, MediaContent, Person, Temporal,
    Transcript, UpdateSchedule,
};

/// Which root format the document used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    /// RSS 2.0 (and the 0.9x dialects that share its `<rss>` root)
    #[default]
    Rss,
    /// Atom 1.0 or 0.3
    Atom,
}

/// A parsed podcast channel.
///
/// Every field is optional or a collection because publishers omit almost
/// anything. Handlers from different namespaces write into the same fields;
/// the last write wins unless a handler only fills a blank field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Feed {
    pub kind: FeedKind,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    /// Primary human-readable link
    pub link: Option<String>,
    pub links: Vec<Link>,
    /// Atom `id`
    pub id: Option<String>,
    pub language: Option<String>,
    pub copyright: Option<String>,
    pub generator: Option<String>,
    pub published: Option<Temporal>,
    pub updated: Option<Temporal>,
    /// RSS `ttl` in minutes
    pub ttl: Option<u32>,
    pub authors: Vec<Person>,
    pub contributors: Vec<Person>,
    pub owner: Option<Person>,
    /// `podcast:person` credits
    pub credits: Vec<Person>,
    pub categories: Vec<Category>,
    pub keywords: Vec<String>,
    pub images: Vec<Image>,
    pub explicit: Option<bool>,
    pub block: Option<bool>,
    pub complete: Option<bool>,
    /// `itunes:type` (episodic or serial)
    pub show_type: Option<String>,
    pub new_feed_url: Option<String>,
    /// `podcast:guid`
    pub podcast_guid: Option<String>,
    pub locked: Option<bool>,
    pub lock_owner: Option<String>,
    /// `podcast:medium` (podcast, music, audiobook, ...)
    pub medium: Option<String>,
    pub funding: Vec<Funding>,
    pub rating: Option<String>,
    pub location: Option<String>,
    pub update_schedule: Option<UpdateSchedule>,
    pub items: Vec<Item>,
}

impl Feed {
    pub fn new(kind: FeedKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items carrying at least one audio enclosure.
    pub fn audio_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.has_audio()).collect()
    }

    pub(crate) fn schedule_mut(&mut self) -> &mut UpdateSchedule {
        self.update_schedule.get_or_insert_with(UpdateSchedule::default)
    }
}

/// One episode (`<item>` or `<entry>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    pub title: Option<String>,
    /// `itunes:title`, the episode title without show or number decorations
    pub episode_title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    /// Full body (`content:encoded`, Atom `content`)
    pub content: Option<String>,
    pub link: Option<String>,
    pub links: Vec<Link>,
    pub guid: Option<String>,
    pub guid_is_permalink: Option<bool>,
    /// RSS `comments` page URL
    pub comments: Option<String>,
    /// `wfw:commentRss`
    pub comment_feed: Option<String>,
    /// `slash:comments`
    pub comment_count: Option<u64>,
    pub published: Option<Temporal>,
    pub updated: Option<Temporal>,
    pub authors: Vec<Person>,
    pub contributors: Vec<Person>,
    pub credits: Vec<Person>,
    pub categories: Vec<Category>,
    pub keywords: Vec<String>,
    pub images: Vec<Image>,
    pub enclosures: Vec<Enclosure>,
    pub media: Vec<MediaContent>,
    pub duration: Option<Duration>,
    pub explicit: Option<bool>,
    pub block: Option<bool>,
    pub episode: Option<u32>,
    pub season: Option<u32>,
    /// `itunes:episodeType` (full, trailer or bonus)
    pub episode_type: Option<String>,
    pub transcripts: Vec<Transcript>,
    pub chapters: Option<Chapters>,
    pub funding: Vec<Funding>,
    /// RSS `source` channel URL
    pub source: Option<String>,
}

impl Item {
    pub fn has_audio(&self) -> bool {
        self.enclosures.iter().any(Enclosure::is_audio)
    }

    /// The first enclosure, which podcast clients treat as the episode media.
    pub fn primary_enclosure(&self) -> Option<&Enclosure> {
        self.enclosures.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_creation() {
        let feed = Feed::new(FeedKind::Atom);
        assert_eq!(feed.kind, FeedKind::Atom);
        assert!(feed.is_empty());
        assert_eq!(feed.item_count(), 0);
    }

    #[test]
    fn test_feed_audio_items_filter() {
        let mut feed = Feed::new(FeedKind::Rss);

        let mut audio = Item::default();
        let mut enc = Enclosure::new("http://example.com/audio.mp3");
        enc.mime_type = Some("audio/mpeg".to_string());
        audio.enclosures.push(enc);
        audio.title = Some("Audio Item".to_string());

        feed.items.push(audio);
        feed.items.push(Item::default());

        let audio_items = feed.audio_items();
        assert_eq!(audio_items.len(), 1);
        assert_eq!(audio_items[0].title.as_deref(), Some("Audio Item"));
    }

    #[test]
    fn test_schedule_created_on_demand() {
        let mut feed = Feed::default();
        assert!(feed.update_schedule.is_none());
        feed.schedule_mut().frequency = Some(2);
        assert_eq!(feed.update_schedule.unwrap().frequency, Some(2));
    }
}
