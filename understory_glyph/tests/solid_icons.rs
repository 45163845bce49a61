// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the built-in catalog exposed by `understory_glyph`.

use understory_glyph::{Glyph, GlyphRegistry, GlyphResolver, SOLID_FAMILY, resolve_logged};

#[test]
fn mixed_case_names_resolve() {
    let icons = GlyphRegistry::solid_icons();
    for name in ["Plus", "SETTINGS", "Arrow-Left", "eye-SLASH"] {
        assert!(icons.resolve(name).is_some(), "{name} should resolve");
    }
}

#[test]
fn unknown_name_is_not_found() {
    let icons = GlyphRegistry::solid_icons();
    assert_eq!(icons.resolve("not-a-real-icon"), None);
    assert_eq!(resolve_logged(&icons, "not-a-real-icon"), None);
    assert_eq!(resolve_logged(&icons, ""), None);
}

#[test]
fn catalog_can_be_extended_and_overridden() {
    let mut icons = GlyphRegistry::solid_icons();
    let before = icons.len();
    icons.insert("Rocket", Glyph::new(SOLID_FAMILY, '\u{f135}'));
    icons.insert("plus", Glyph::new("Other Font", '+'));
    assert_eq!(icons.len(), before + 1);
    assert_eq!(icons.resolve("rocket").map(|g| g.codepoint), Some('\u{f135}'));
    assert_eq!(icons.resolve("plus").unwrap().family, "Other Font");
}

#[test]
fn known_names_are_listed_for_diagnostics() {
    let icons = GlyphRegistry::solid_icons();
    let names = icons.known_names();
    assert!(names.iter().any(|n| n == "plus"));
    assert!(names.windows(2).all(|w| w[0] <= w[1]));
}
