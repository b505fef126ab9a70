//! Optional collaborators of the dispatch loop: diagnostics hooks and the
//! element filter.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Feed, Item};

/// Which loop an element was met in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseLevel {
    Feed,
    Item,
}

/// An element the parser met but did not map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EncounteredElement {
    pub namespace: Option<String>,
    pub local_name: String,
    pub attributes: BTreeSet<String>,
    pub level: ParseLevel,
}

impl std::fmt::Display for EncounteredElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{ns}}}{}", self.local_name),
            None => f.write_str(&self.local_name),
        }
    }
}

/// Hooks called by the dispatch loop.
///
/// Hooks only get shared access to the parse state and must not move the
/// cursor; debug builds verify the position around every call. All hooks
/// default to no-ops.
pub trait Diagnostics {
    /// Called once before the channel's fields are mapped.
    fn before_feed(&mut self, feed: &Feed) {
        let _ = feed;
    }

    /// Called before each item's fields are mapped.
    fn before_item(&mut self, item: &Item) {
        let _ = item;
    }

    /// An element whose namespace no handler recognises.
    fn unknown_namespace(&mut self, element: &EncounteredElement) {
        let _ = element;
    }

    /// An element in a known namespace with no field mapping.
    fn unmapped_element(&mut self, element: &EncounteredElement) {
        let _ = element;
    }
}

/// Diagnostics that ignore everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {}

/// Counts unmapped elements, for finding gaps in the field mappings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementStats {
    pub feeds: usize,
    pub items: usize,
    pub unknown_namespaces: BTreeMap<EncounteredElement, usize>,
    pub unmapped_elements: BTreeMap<EncounteredElement, usize>,
}

impl ElementStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds another collector's counts to this one.
    pub fn merge(&mut self, other: ElementStats) {
        self.feeds += other.feeds;
        self.items += other.items;
        for (element, count) in other.unknown_namespaces {
            *self.unknown_namespaces.entry(element).or_default() += count;
        }
        for (element, count) in other.unmapped_elements {
            *self.unmapped_elements.entry(element).or_default() += count;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unknown_namespaces.is_empty() && self.unmapped_elements.is_empty()
    }
}

impl Diagnostics for ElementStats {
    fn before_feed(&mut self, _feed: &Feed) {
        self.feeds += 1;
    }

    fn before_item(&mut self, _item: &Item) {
        self.items += 1;
    }

    fn unknown_namespace(&mut self, element: &EncounteredElement) {
        *self.unknown_namespaces.entry(element.clone()).or_default() += 1;
    }

    fn unmapped_element(&mut self, element: &EncounteredElement) {
        *self.unmapped_elements.entry(element.clone()).or_default() += 1;
    }
}

/// Decides which elements the dispatch loop skips without looking at them.
pub trait ElementFilter {
    fn skip(&self, namespace: Option<&str>, local_name: &str) -> bool;
}

impl<F> ElementFilter for F
where
    F: Fn(Option<&str>, &str) -> bool,
{
    fn skip(&self, namespace: Option<&str>, local_name: &str) -> bool {
        self(namespace, local_name)
    }
}

/// A filter that skips nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl ElementFilter for NoFilter {
    fn skip(&self, _namespace: Option<&str>, _local_name: &str) -> bool {
        false
    }
}
