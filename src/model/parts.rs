use serde::Serialize;
use std::time::Duration;

use super::Temporal;

/// An author, owner, contributor or credited person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: Option<String>,
    pub email: Option<String>,
    pub uri: Option<String>,
    /// Role from `podcast:person` (e.g. "host", "guest").
    pub role: Option<String>,
    /// Role group from `podcast:person` (e.g. "cast", "writing").
    pub group: Option<String>,
    /// Portrait image URL.
    pub image: Option<String>,
}

impl Person {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Parses the RSS `managingEditor`/`author` convention.
    ///
    /// Accepts `email (Name)`, `Name <email>`, a bare email address or a bare
    /// name. Anything that does not look like an address is kept as the name.
    pub fn from_rss_author(raw: &str) -> Self {
        let raw = raw.trim();

        if let Some((email, rest)) = raw.split_once('(') {
            let name = rest.trim_end_matches(')').trim();
            let email = email.trim();
            if email.contains('@') {
                return Self {
                    name: non_empty(name),
                    email: non_empty(email),
                    ..Self::default()
                };
            }
        }

        if let Some((name, rest)) = raw.split_once('<') {
            let email = rest.trim_end_matches('>').trim();
            if email.contains('@') {
                return Self {
                    name: non_empty(name.trim()),
                    email: non_empty(email),
                    ..Self::default()
                };
            }
        }

        if raw.contains('@') && !raw.contains(char::is_whitespace) {
            return Self {
                email: non_empty(raw),
                ..Self::default()
            };
        }

        Self {
            name: non_empty(raw),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.uri.is_none()
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// A link with Atom-style attributes. RSS `<link>` text becomes a link with
/// only `href` set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub rel: Option<String>,
    pub mime_type: Option<String>,
    pub title: Option<String>,
    pub length: Option<u64>,
    pub hreflang: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    /// True for links that point at the human-readable page: no `rel`, or
    /// `rel="alternate"`.
    pub fn is_alternate(&self) -> bool {
        self.rel.as_deref().map_or(true, |rel| rel == "alternate")
    }
}

/// Media enclosure attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enclosure {
    pub url: String,
    /// File size in bytes
    pub length: Option<u64>,
    /// MIME type (e.g., "audio/mpeg")
    pub mime_type: Option<String>,
}

impl Enclosure {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            length: None,
            mime_type: None,
        }
    }

    pub fn is_audio(&self) -> bool {
        self.mime_type
            .as_ref()
            .map_or(false, |mime| mime.starts_with("audio/"))
    }

    pub fn is_video(&self) -> bool {
        self.mime_type
            .as_ref()
            .map_or(false, |mime| mime.starts_with("video/"))
    }
}

/// A category with optional nested subcategories (iTunes nests them).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    /// RSS `domain` or Atom/Media RSS `scheme`.
    pub scheme: Option<String>,
    pub label: Option<String>,
    pub subcategories: Vec<Category>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
    pub title: Option<String>,
    pub link: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub description: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// A Media RSS `media:content` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaContent {
    pub url: Option<String>,
    pub mime_type: Option<String>,
    /// image, audio, video, document or executable
    pub medium: Option<String>,
    pub file_size: Option<u64>,
    pub duration: Option<Duration>,
    /// Kilobits per second
    pub bitrate: Option<f64>,
    pub framerate: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub language: Option<String>,
    pub is_default: Option<bool>,
    /// sample, full or nonstop
    pub expression: Option<String>,
    pub title: Option<String>,
    pub thumbnails: Vec<Image>,
}

/// A `podcast:transcript` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub url: String,
    pub mime_type: Option<String>,
    pub language: Option<String>,
    pub rel: Option<String>,
}

/// A `podcast:chapters` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapters {
    pub url: String,
    pub mime_type: Option<String>,
}

/// A donation or support link (`podcast:funding`, `rawvoice:donate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Funding {
    pub url: String,
    pub message: Option<String>,
}

/// RSS Syndication module hints (`sy:updatePeriod` and friends).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSchedule {
    /// hourly, daily, weekly, monthly or yearly
    pub period: Option<String>,
    pub frequency: Option<u32>,
    pub base: Option<Temporal>,
}
