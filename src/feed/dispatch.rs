//! The per-level dispatch loop.
//!
//! One loop runs for the channel (`<channel>` or `<feed>`) and one for each
//! item (`<item>` or `<entry>`). Every child element is offered to the
//! handler of its namespace; anything nobody maps goes to the diagnostics
//! hooks and is skipped.

use std::io::BufRead;

#[cfg(debug_assertions)]
use super::cursor::CursorState;
use super::cursor::{StreamCursor, StreamError};
use super::diagnostics::{Diagnostics, ElementFilter, EncounteredElement, ParseLevel};
use super::namespace::{Namespace, Outcome};
use super::registry::NamespaceRegistry;
use crate::model::{Feed, Item};

/// Local names that mean something in the root format even when written
/// with a namespace the registry does not know (or one whose handler does
/// not map them).
const AMBIGUOUS_ELEMENTS: &[&str] = &["category", "image", "link", "comments"];

/// A level the loop can populate.
trait Target {
    const LEVEL: ParseLevel;

    fn map<R: BufRead>(
        &mut self,
        namespace: Namespace,
        cursor: &mut StreamCursor<'_, R>,
    ) -> Result<Outcome, StreamError>;

    fn announce(&self, diagnostics: &mut dyn Diagnostics);
}

impl Target for Feed {
    const LEVEL: ParseLevel = ParseLevel::Feed;

    fn map<R: BufRead>(
        &mut self,
        namespace: Namespace,
        cursor: &mut StreamCursor<'_, R>,
    ) -> Result<Outcome, StreamError> {
        namespace.feed_element(cursor, self)
    }

    fn announce(&self, diagnostics: &mut dyn Diagnostics) {
        diagnostics.before_feed(self);
    }
}

impl Target for Item {
    const LEVEL: ParseLevel = ParseLevel::Item;

    fn map<R: BufRead>(
        &mut self,
        namespace: Namespace,
        cursor: &mut StreamCursor<'_, R>,
    ) -> Result<Outcome, StreamError> {
        namespace.item_element(cursor, self)
    }

    fn announce(&self, diagnostics: &mut dyn Diagnostics) {
        diagnostics.before_item(self);
    }
}

enum Notice {
    UnknownNamespace,
    Unmapped,
}

pub(crate) struct Dispatcher<'d, 'a, R> {
    cursor: &'d mut StreamCursor<'a, R>,
    registry: &'d NamespaceRegistry,
    filter: &'d dyn ElementFilter,
    diagnostics: &'d mut dyn Diagnostics,
    /// Namespace of the document root; owns un-namespaced elements.
    root: Namespace,
}

impl<'d, 'a, R: BufRead> Dispatcher<'d, 'a, R> {
    pub(crate) fn new(
        cursor: &'d mut StreamCursor<'a, R>,
        registry: &'d NamespaceRegistry,
        filter: &'d dyn ElementFilter,
        diagnostics: &'d mut dyn Diagnostics,
        root: Namespace,
    ) -> Self {
        Self {
            cursor,
            registry,
            filter,
            diagnostics,
            root,
        }
    }

    /// Maps the children of the channel element the cursor sits on, until
    /// its end-element.
    pub(crate) fn feed_level(&mut self, feed: &mut Feed) -> Result<(), StreamError> {
        self.announce(&*feed);

        while self.cursor.next_child()? {
            if self.filtered()? {
                continue;
            }
            if self.starts_item() {
                let item = self.item_level()?;
                feed.items.push(item);
                continue;
            }
            self.dispatch_child(feed)?;
        }
        Ok(())
    }

    /// Maps the children of the item element the cursor sits on.
    pub(crate) fn item_level(&mut self) -> Result<Item, StreamError> {
        let mut item = Item::default();
        self.announce(&item);

        while self.cursor.next_child()? {
            if self.filtered()? {
                continue;
            }
            self.dispatch_child(&mut item)?;
        }
        Ok(item)
    }

    fn dispatch_child<T: Target>(&mut self, target: &mut T) -> Result<(), StreamError> {
        let Some(namespace) = self.route() else {
            self.notify(T::LEVEL, Notice::UnknownNamespace);
            return self.discard();
        };

        let mut outcome = self.delegate(namespace, target)?;
        if outcome == Outcome::Unmapped && namespace != self.root && self.is_ambiguous() {
            outcome = self.delegate(self.root, target)?;
        }

        if outcome == Outcome::Unmapped {
            self.notify(T::LEVEL, Notice::Unmapped);
            self.discard()?;
        }
        Ok(())
    }

    /// Picks the handler for the current element, `None` for an unknown
    /// namespace.
    ///
    /// Unprefixed elements under a default namespace the registry does not
    /// know still belong to the root format.
    fn route(&self) -> Option<Namespace> {
        let Some(uri) = self.cursor.namespace_uri() else {
            return Some(self.root);
        };
        match self.registry.resolve(Some(uri)) {
            Some(namespace) => Some(namespace),
            None if !self.cursor.is_prefixed() || self.is_ambiguous() => Some(self.root),
            None => None,
        }
    }

    fn is_ambiguous(&self) -> bool {
        AMBIGUOUS_ELEMENTS.contains(&self.cursor.local_name())
    }

    fn starts_item(&self) -> bool {
        self.root.item_tag() == Some(self.cursor.local_name())
            && self.route() == Some(self.root)
    }

    /// Runs one handler, checking the cursor contract in debug builds.
    fn delegate<T: Target>(
        &mut self,
        namespace: Namespace,
        target: &mut T,
    ) -> Result<Outcome, StreamError> {
        #[cfg(debug_assertions)]
        let before = CursorState::capture(self.cursor);

        let outcome = target.map(namespace, self.cursor)?;

        #[cfg(debug_assertions)]
        {
            match outcome {
                Outcome::Consumed => before.assert_closed(self.cursor, namespace.name()),
                Outcome::Unmapped => before.assert_unchanged(self.cursor, namespace.name()),
            }
        }
        Ok(outcome)
    }

    fn announce<T: Target>(&mut self, target: &T) {
        #[cfg(debug_assertions)]
        let before = CursorState::capture(self.cursor);

        target.announce(self.diagnostics);

        #[cfg(debug_assertions)]
        before.assert_unchanged(self.cursor, "diagnostics hook");
    }

    fn notify(&mut self, level: ParseLevel, notice: Notice) {
        let element = EncounteredElement {
            namespace: self.cursor.namespace_uri().map(str::to_string),
            local_name: self.cursor.local_name().to_string(),
            attributes: self.cursor.attribute_names().map(str::to_string).collect(),
            level,
        };

        #[cfg(debug_assertions)]
        let before = CursorState::capture(self.cursor);

        match notice {
            Notice::UnknownNamespace => {
                tracing::debug!(element = %element, level = ?level, "Element in unknown namespace");
                self.diagnostics.unknown_namespace(&element);
            }
            Notice::Unmapped => {
                tracing::debug!(element = %element, level = ?level, "Element has no mapping");
                self.diagnostics.unmapped_element(&element);
            }
        }

        #[cfg(debug_assertions)]
        before.assert_unchanged(self.cursor, "diagnostics hook");
    }

    /// Skips the caller-filtered element, if it is one.
    fn filtered(&mut self) -> Result<bool, StreamError> {
        if !self
            .filter
            .skip(self.cursor.namespace_uri(), self.cursor.local_name())
        {
            return Ok(false);
        }
        tracing::trace!(element = %self.cursor.qualified_name(), "Skipping filtered element");
        self.cursor.skip_subtree()?;
        Ok(true)
    }

    /// Skips an element nobody mapped, logging its markup at trace level.
    fn discard(&mut self) -> Result<(), StreamError> {
        if tracing::enabled!(tracing::Level::TRACE) {
            let markup = self.cursor.serialize_subtree()?;
            tracing::trace!(markup = %markup, "Skipped unmapped subtree");
            Ok(())
        } else {
            self.cursor.skip_subtree()
        }
    }
}
