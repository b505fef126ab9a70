//! Entity and DOCTYPE policy.
//!
//! SEC-002: quick-xml (0.37) never reads `<!ENTITY>` declarations or fetches
//! external DTDs. Every general entity reference it meets in text or attribute
//! values is handed to an [`EntityResolver`], so this module is the only place
//! that decides what `&name;` turns into. The default resolver knows the XML
//! builtins and the HTML5 named entities that publishers paste into feeds,
//! and substitutes an empty string for everything else (`&xxe;` included).

use quick_xml::escape::{resolve_html5_entity, resolve_predefined_entity};

/// What the DOCTYPE says about the document before its root is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctypeVerdict {
    /// Keep parsing.
    Allow,
    /// The document declares itself as an HTML page.
    Html,
}

/// Resolves general entities and classifies DOCTYPE declarations.
///
/// Implementations must never perform I/O: the cursor calls them in the
/// middle of tokenizing and expects an immediate answer.
pub trait EntityResolver {
    /// Replacement text for `&name;`, or `None` to keep the reference as an
    /// unescape error (the cursor then keeps the raw text).
    fn resolve_entity(&self, name: &str) -> Option<&str>;

    /// Inspects the body of `<!DOCTYPE ...>`.
    fn classify_doctype(&self, doctype: &str) -> DoctypeVerdict {
        let _ = doctype;
        DoctypeVerdict::Allow
    }
}

/// The default policy: builtins, HTML5 named entities, empty otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeEntityResolver;

/// Public identifiers that only ever appear on web pages.
const HTML_PUBLIC_IDS: &[&str] = &["-//w3c//dtd html", "-//w3c//dtd xhtml", "-//ietf//dtd html"];

impl EntityResolver for SafeEntityResolver {
    fn resolve_entity(&self, name: &str) -> Option<&str> {
        let resolved = resolve_predefined_entity(name).or_else(|| resolve_html5_entity(name));
        if resolved.is_none() {
            tracing::debug!(entity = %name, "Substituting empty text for unknown entity");
        }
        Some(resolved.unwrap_or(""))
    }

    fn classify_doctype(&self, doctype: &str) -> DoctypeVerdict {
        let lowered = doctype.trim().to_ascii_lowercase();
        let root = lowered.split_whitespace().next().unwrap_or_default();

        if root == "html" || HTML_PUBLIC_IDS.iter().any(|id| lowered.contains(id)) {
            DoctypeVerdict::Html
        } else {
            DoctypeVerdict::Allow
        }
    }
}
