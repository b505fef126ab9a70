//! Streaming feed parsing.
//!
//! - [`cursor`] - forward-only element walk over `quick-xml`
//! - [`entities`] - entity and DOCTYPE policy (no external fetches)
//! - [`registry`] - namespace URI to handler table
//! - [`namespace`] - one handler per supported namespace
//! - [`diagnostics`] - hooks for unmapped elements, and the element filter
//! - [`root`] - root element detection and the public [`FeedParser`]
//!
//! The dispatch loop that ties handlers to the cursor is private.

pub mod cursor;
pub mod diagnostics;
mod dispatch;
pub mod entities;
pub mod namespace;
pub mod registry;
pub mod root;

pub use cursor::{EventKind, StreamCursor, StreamError, MAX_DEPTH};
pub use diagnostics::{
    Diagnostics, ElementFilter, ElementStats, EncounteredElement, NoDiagnostics, NoFilter,
    ParseLevel,
};
pub use entities::{DoctypeVerdict, EntityResolver, SafeEntityResolver};
pub use namespace::{Namespace, Outcome};
pub use registry::{NamespaceRegistry, RegistryError};
pub use root::{FeedParser, NotAFeed, ParseError};
