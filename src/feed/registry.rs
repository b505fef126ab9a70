//! Namespace identity table.
//!
//! Maps every known namespace URI, alias and bare prefix to exactly one
//! [`Namespace`]. The standard table is built once per process and never
//! mutated afterwards, so concurrent parses share it without locking.

use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

use super::namespace::Namespace;

/// Errors raised while building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two namespaces claim the same identity string.
    #[error("namespace identity {identity:?} claimed by both {existing} and {conflicting}")]
    DuplicateIdentity {
        identity: String,
        existing: Namespace,
        conflicting: Namespace,
    },
}

#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    exact: HashMap<String, Namespace>,
    /// Trimmed, lowercased identities for lenient lookup.
    folded: HashMap<String, Namespace>,
}

fn fold(identity: &str) -> String {
    identity.trim().to_lowercase()
}

impl NamespaceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry holding the given namespaces.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateIdentity`] if two namespaces share
    /// an identity.
    pub fn with_namespaces(namespaces: &[Namespace]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for namespace in namespaces {
            registry.register(*namespace)?;
        }
        Ok(registry)
    }

    /// The registry with every built-in namespace.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in identity tables overlap, which is
    /// a programming error rather than a runtime condition.
    pub fn standard() -> &'static NamespaceRegistry {
        static STANDARD: OnceLock<NamespaceRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            NamespaceRegistry::with_namespaces(&Namespace::ALL)
                .unwrap_or_else(|err| panic!("built-in namespace table is inconsistent: {err}"))
        })
    }

    /// Registers every identity of `namespace`.
    ///
    /// Registering the same namespace twice is harmless.
    pub fn register(&mut self, namespace: Namespace) -> Result<(), RegistryError> {
        for identity in namespace.identities() {
            self.alias(identity, namespace)?;
        }
        Ok(())
    }

    /// Adds one extra identity string for `namespace`, for publishers that
    /// invent their own URI.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateIdentity`] if the string, or its
    /// case-folded form, already belongs to a different namespace.
    pub fn alias(&mut self, identity: &str, namespace: Namespace) -> Result<(), RegistryError> {
        let folded = fold(identity);
        let conflict = self
            .exact
            .get(identity)
            .or_else(|| self.folded.get(&folded))
            .filter(|existing| **existing != namespace);

        if let Some(existing) = conflict {
            return Err(RegistryError::DuplicateIdentity {
                identity: identity.to_string(),
                existing: *existing,
                conflicting: namespace,
            });
        }

        self.exact.insert(identity.to_string(), namespace);
        self.folded.insert(folded, namespace);
        Ok(())
    }

    /// Resolves a namespace URI (or bare prefix) to its handler.
    ///
    /// Exact match first, then a trimmed, case-insensitive match. Never
    /// matches by prefix: `http://purl.org/rss/1.0/modules/foo/` does not
    /// resolve to RSS.
    pub fn resolve(&self, uri: Option<&str>) -> Option<Namespace> {
        let uri = uri?;
        self.exact
            .get(uri)
            .or_else(|| self.folded.get(&fold(uri)))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}
