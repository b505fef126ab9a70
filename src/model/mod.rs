//! Feed data model.
//!
//! Plain aggregates populated by the namespace handlers. Nothing in here
//! parses XML; the types only describe what a podcast feed can carry.

mod feed;
mod parts;
mod temporal;

pub use feed::{Feed, FeedKind, Item};
pub use parts::{
    Category, Chapters, Enclosure, Funding, Image, Link, MediaContent, Person, Transcript,
    UpdateSchedule,
};
pub use temporal::Temporal;
