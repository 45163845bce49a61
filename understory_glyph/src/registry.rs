// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{Glyph, GlyphResolver};

/// A case-insensitive table of named glyphs.
///
/// Names are folded to lowercase on insert and on lookup, so `"Home"`,
/// `"HOME"` and `"home"` all resolve to the same entry.
#[derive(Clone, Debug, Default)]
pub struct GlyphRegistry {
    glyphs: HashMap<String, Glyph>,
}

impl GlyphRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` glyphs.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            glyphs: HashMap::with_capacity(capacity),
        }
    }

    /// Registers `glyph` under `name`, returning the glyph it replaced.
    pub fn insert(&mut self, name: &str, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(name.to_lowercase(), glyph)
    }

    /// Removes the glyph registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Glyph> {
        self.glyphs.remove(&name.to_lowercase())
    }

    /// Returns `true` if `name` resolves.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.glyphs.contains_key(&name.to_lowercase())
    }

    /// Number of registered glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Registered names in lexicographic order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.glyphs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl GlyphResolver for GlyphRegistry {
    fn resolve(&self, name: &str) -> Option<Glyph> {
        self.glyphs.get(&name.to_lowercase()).cloned()
    }

    fn known_names(&self) -> Vec<String> {
        self.names().into_iter().map(str::to_owned).collect()
    }
}

impl<'a> Extend<(&'a str, Glyph)> for GlyphRegistry {
    fn extend<I: IntoIterator<Item = (&'a str, Glyph)>>(&mut self, iter: I) {
        for (name, glyph) in iter {
            self.insert(name, glyph);
        }
    }
}

impl<'a> FromIterator<(&'a str, Glyph)> for GlyphRegistry {
    fn from_iter<I: IntoIterator<Item = (&'a str, Glyph)>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::GlyphRegistry;
    use crate::{Glyph, GlyphResolver};

    fn glyph(codepoint: char) -> Glyph {
        Glyph::new("Test Icons", codepoint)
    }

    #[test]
    fn lookup_ignores_case() {
        let mut registry = GlyphRegistry::new();
        registry.insert("Home", glyph('h'));
        assert_eq!(registry.resolve("home"), Some(glyph('h')));
        assert_eq!(registry.resolve("HOME"), Some(glyph('h')));
        assert!(registry.contains("hOmE"));
    }

    #[test]
    fn insert_replaces_case_folded_duplicates() {
        let mut registry = GlyphRegistry::new();
        assert_eq!(registry.insert("star", glyph('a')), None);
        assert_eq!(registry.insert("STAR", glyph('b')), Some(glyph('a')));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("star"), Some(glyph('b')));
    }

    #[test]
    fn remove_and_unknown_names() {
        let mut registry: GlyphRegistry = [("bell", glyph('b'))].into_iter().collect();
        assert_eq!(registry.resolve("not-a-real-icon"), None);
        assert_eq!(registry.remove("BELL"), Some(glyph('b')));
        assert!(registry.is_empty());
        assert_eq!(registry.resolve("bell"), None);
    }

    #[test]
    fn names_are_sorted() {
        let registry: GlyphRegistry = [("zap", glyph('z')), ("arrow", glyph('a'))]
            .into_iter()
            .collect();
        assert_eq!(registry.names(), ["arrow", "zap"]);
        assert_eq!(registry.known_names(), ["arrow", "zap"]);
    }
}
