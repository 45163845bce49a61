// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_glyph --heading-base-level=0

//! Understory Glyph: resolve icon names to font glyphs.
//!
//! Widgets that show icons usually take a string name from the application
//! (`"plus"`, `"settings"`) and need something a renderer can paint. This
//! crate keeps that mapping out of the widgets:
//!
//! - [`Glyph`]: a codepoint in a named icon font.
//! - [`GlyphResolver`]: the capability widgets depend on. Anything that can
//!   map a name to an optional glyph can be injected.
//! - [`GlyphRegistry`]: a case-insensitive table implementing the trait.
//! - [`resolve_logged`]: lookup that emits a `tracing` warning for unknown
//!   names instead of failing.
//!
//! With the default `solid_icons` feature, [`GlyphRegistry::solid_icons`]
//! provides a small catalog of common solid icons.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_glyph::{Glyph, GlyphRegistry, GlyphResolver, resolve_logged};
//!
//! let mut icons = GlyphRegistry::new();
//! icons.insert("plus", Glyph::new("My Icons", '+'));
//!
//! assert_eq!(icons.resolve("PLUS").map(|g| g.codepoint), Some('+'));
//!
//! // Unknown names log a warning and resolve to nothing.
//! assert!(resolve_logged(&icons, "not-a-real-icon").is_none());
//! ```
//!
//! Resolvers can also be plain functions:
//!
//! ```rust
//! use understory_glyph::{Glyph, GlyphResolver, from_fn};
//!
//! let letters = from_fn(|name: &str| {
//!     let mut chars = name.chars();
//!     match (chars.next(), chars.next()) {
//!         (Some(c), None) => Some(Glyph::new("Letters", c)),
//!         _ => None,
//!     }
//! });
//! assert!(letters.resolve("x").is_some());
//! assert!(letters.resolve("xy").is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "solid_icons")]
mod catalog;
mod registry;

#[cfg(feature = "solid_icons")]
pub use catalog::{SOLID_FAMILY, SOLID_ICONS};
pub use registry::GlyphRegistry;

/// A single icon: a codepoint in an icon font.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    /// Font family that contains [`Glyph::codepoint`].
    pub family: Cow<'static, str>,
    /// Codepoint to draw.
    pub codepoint: char,
}

impl Glyph {
    /// Creates a glyph.
    #[must_use]
    pub fn new(family: impl Into<Cow<'static, str>>, codepoint: char) -> Self {
        Self {
            family: family.into(),
            codepoint,
        }
    }
}

/// Maps icon names to glyphs.
pub trait GlyphResolver {
    /// Returns the glyph registered for `name`, if any.
    fn resolve(&self, name: &str) -> Option<Glyph>;

    /// Names this resolver knows, used to make diagnostics actionable.
    ///
    /// Resolvers that cannot enumerate their names return an empty list.
    fn known_names(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<R: GlyphResolver + ?Sized> GlyphResolver for &R {
    fn resolve(&self, name: &str) -> Option<Glyph> {
        (**self).resolve(name)
    }

    fn known_names(&self) -> Vec<String> {
        (**self).known_names()
    }
}

impl<R: GlyphResolver + ?Sized> GlyphResolver for Box<R> {
    fn resolve(&self, name: &str) -> Option<Glyph> {
        (**self).resolve(name)
    }

    fn known_names(&self) -> Vec<String> {
        (**self).known_names()
    }
}

/// A resolver that knows no glyphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoGlyphs;

impl GlyphResolver for NoGlyphs {
    fn resolve(&self, _name: &str) -> Option<Glyph> {
        None
    }
}

/// Resolver backed by a closure; see [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F: Fn(&str) -> Option<Glyph>> GlyphResolver for FromFn<F> {
    fn resolve(&self, name: &str) -> Option<Glyph> {
        (self.0)(name)
    }
}

/// Wraps a closure as a [`GlyphResolver`].
pub fn from_fn<F: Fn(&str) -> Option<Glyph>>(f: F) -> FromFn<F> {
    FromFn(f)
}

/// Resolves `name`, logging a warning when it is unknown.
///
/// Unknown names are never an error: callers render an empty glyph slot.
pub fn resolve_logged<R: GlyphResolver + ?Sized>(resolver: &R, name: &str) -> Option<Glyph> {
    let glyph = resolver.resolve(name);
    if glyph.is_none() {
        let known = resolver.known_names();
        if known.is_empty() {
            tracing::warn!(glyph = name, "glyph not found");
        } else {
            tracing::warn!(
                glyph = name,
                available = %known.join(", "),
                "glyph not found"
            );
        }
    }
    glyph
}
