//! Resource dictionaries: named style registries with merged-dictionary
//! chaining.
//!
//! A [`ResourceDictionary`] maps resource keys to [`Style`]s. Dictionaries can
//! absorb other dictionaries via [`ResourceDictionary::merge_dictionary`];
//! lookups consult the dictionary's own entries first and then the merged
//! dictionaries, most recently merged first.
//!
//! Anything that can answer "which style is bound to this key" implements
//! [`StyleSource`]; resolution code depends on that trait rather than on the
//! concrete dictionary type.

use std::collections::HashMap;
use std::sync::Arc;

use crate::style::Style;

/// A provider of key → style lookups.
pub trait StyleSource {
    /// Look up the style bound to `key`, if any.
    fn lookup(&self, key: &str) -> Option<Style>;
}

/// A shareable, read-only handle to a style registry.
pub type ScopeHandle = Arc<dyn StyleSource + Send + Sync>;

/// A named collection of style resources.
#[derive(Debug, Clone, Default)]
pub struct ResourceDictionary {
    entries: HashMap<String, Style>,
    merged: Vec<Arc<ResourceDictionary>>,
}

impl ResourceDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a style to a key.
    ///
    /// Returns the previously bound style if the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, style: Style) -> Option<Style> {
        let key = key.into();
        let replaced = self.entries.insert(key.clone(), style);
        if replaced.is_some() {
            tracing::debug!("Replacing style resource '{}'", key);
        }
        replaced
    }

    /// Remove a key from this dictionary's own entries.
    pub fn remove(&mut self, key: &str) -> Option<Style> {
        self.entries.remove(key)
    }

    /// Get the style bound to `key`.
    ///
    /// Own entries shadow merged dictionaries; among merged dictionaries the
    /// most recently merged one wins.
    pub fn get(&self, key: &str) -> Option<&Style> {
        self.entries
            .get(key)
            .or_else(|| self.merged.iter().rev().find_map(|dict| dict.get(key)))
    }

    /// Check whether `key` resolves through this dictionary or its merged
    /// dictionaries.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Absorb another dictionary. Its entries are consulted after this
    /// dictionary's own entries, and before previously merged dictionaries.
    pub fn merge_dictionary(&mut self, dictionary: Arc<ResourceDictionary>) {
        self.merged.push(dictionary);
    }

    /// The merged dictionaries, in merge order.
    pub fn merged_dictionaries(&self) -> &[Arc<ResourceDictionary>] {
        &self.merged
    }

    /// Number of entries owned directly by this dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether this dictionary owns no entries and merges none.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.merged.is_empty()
    }

    /// Iterate over this dictionary's own entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl StyleSource for ResourceDictionary {
    fn lookup(&self, key: &str) -> Option<Style> {
        self.get(key).cloned()
    }
}
