// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in catalog of common solid icons.

use alloc::borrow::Cow;

use crate::{Glyph, GlyphRegistry};

/// Font family the built-in catalog's codepoints belong to.
pub const SOLID_FAMILY: &str = "Font Awesome 6 Free Solid";

/// Names and private-use codepoints of the built-in catalog.
///
/// Several entries use an app-facing name rather than the font's own
/// (`settings` is the gear, `close` the cross, `menu` the bars).
pub const SOLID_ICONS: &[(&str, char)] = &[
    ("plus", '\u{f067}'),
    ("home", '\u{f015}'),
    ("user", '\u{f007}'),
    ("settings", '\u{f013}'),
    ("search", '\u{f002}'),
    ("heart", '\u{f004}'),
    ("star", '\u{f005}'),
    ("edit", '\u{f044}'),
    ("trash", '\u{f1f8}'),
    ("save", '\u{f0c7}'),
    ("close", '\u{f00d}'),
    ("check", '\u{f00c}'),
    ("arrow-left", '\u{f060}'),
    ("arrow-right", '\u{f061}'),
    ("menu", '\u{f0c9}'),
    ("share", '\u{f064}'),
    ("download", '\u{f019}'),
    ("upload", '\u{f093}'),
    ("camera", '\u{f030}'),
    ("image", '\u{f03e}'),
    ("file", '\u{f15b}'),
    ("folder", '\u{f07b}'),
    ("envelope", '\u{f0e0}'),
    ("phone", '\u{f095}'),
    ("map-marker", '\u{f3c5}'),
    ("calendar", '\u{f133}'),
    ("clock", '\u{f017}'),
    ("bell", '\u{f0f3}'),
    ("lock", '\u{f023}'),
    ("unlock", '\u{f09c}'),
    ("eye", '\u{f06e}'),
    ("eye-slash", '\u{f070}'),
];

impl GlyphRegistry {
    /// Returns a registry pre-filled with [`SOLID_ICONS`].
    #[must_use]
    pub fn solid_icons() -> Self {
        let mut registry = Self::with_capacity(SOLID_ICONS.len());
        for &(name, codepoint) in SOLID_ICONS {
            registry.insert(name, Glyph::new(Cow::Borrowed(SOLID_FAMILY), codepoint));
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::{SOLID_FAMILY, SOLID_ICONS};
    use crate::{GlyphRegistry, GlyphResolver};

    #[test]
    fn catalog_names_are_unique_and_lowercase() {
        for (i, (name, _)) in SOLID_ICONS.iter().enumerate() {
            assert_eq!(*name, name.to_lowercase(), "{name} is not lowercase");
            assert!(
                SOLID_ICONS[i + 1..].iter().all(|(other, _)| other != name),
                "{name} appears twice"
            );
        }
    }

    #[test]
    fn solid_registry_resolves_every_entry() {
        let registry = GlyphRegistry::solid_icons();
        assert_eq!(registry.len(), SOLID_ICONS.len());
        for &(name, codepoint) in SOLID_ICONS {
            let glyph = registry.resolve(name).unwrap();
            assert_eq!(glyph.codepoint, codepoint);
            assert_eq!(glyph.family, SOLID_FAMILY);
        }
    }
}
