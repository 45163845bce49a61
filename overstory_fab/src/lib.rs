// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_fab --heading-base-level=0

//! Overstory FAB: a headless expandable floating action button.
//!
//! A floating action button sits in a corner of its container. Tapping it
//! reveals a stack of secondary action items over a dimmed backdrop; tapping
//! again, selecting an item or (optionally) tapping the backdrop collapses the
//! stack. This crate implements the behavior without drawing anything:
//!
//! - [`Trigger`]: the widget. It owns the open/closed state, two animation
//!   channels and the item slots, takes input through plain method calls and
//!   produces a [`TriggerView`] snapshot per frame.
//! - [`ActionItem`]: description of one secondary action.
//! - [`Fab`]: convenience wrapper that builds a trigger from a list of
//!   [`FabOption`]s with a color palette, or a plain button when the list is
//!   empty.
//! - [`PhaseMachine`]: the four-phase state machine behind the trigger,
//!   usable on its own.
//! - [`layout`]: pure placement functions.
//!
//! Time is driven by the host: call [`Trigger::advance`] once per frame while
//! [`Trigger::needs_frame`] is `true`. Icons are resolved through an injected
//! [`GlyphResolver`](understory_glyph::GlyphResolver); unknown names are
//! logged and drawn empty.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use overstory_fab::{ActionItem, HitTarget, Phase, Trigger, TriggerConfig};
//! use understory_glyph::GlyphRegistry;
//!
//! let container = Size::new(360.0, 640.0);
//! let icons = GlyphRegistry::solid_icons();
//! let mut fab = Trigger::new(TriggerConfig {
//!     background_tappable: true,
//!     ..TriggerConfig::default()
//! })
//! .with_item(ActionItem::new().title("Camera").glyph("camera"))
//! .with_item(ActionItem::new().title("Gallery").glyph("image"));
//!
//! // Tap the primary button through hit testing.
//! let center = fab.layout(container).primary().center();
//! assert_eq!(fab.tap_at(container, center), Some(HitTarget::Primary));
//! while fab.needs_frame() {
//!     fab.advance(Duration::from_millis(16));
//! }
//! let view = fab.view(container, &icons);
//! assert_eq!(view.items.len(), 2);
//!
//! // Tapping the backdrop collapses; the stack stays mounted while it settles.
//! fab.tap_at(container, Point::new(10.0, 10.0));
//! assert_eq!(fab.phase(), Phase::Closing);
//! while fab.needs_frame() {
//!     fab.advance(Duration::from_millis(16));
//! }
//! assert_eq!(fab.phase(), Phase::Closed);
//! ```
//!
//! ## Features
//!
//! - `serde`: [`TriggerSettings`], `ItemSettings` and `FabSettings`, camelCase
//!   mirrors of the configuration with CSS color strings.

mod config;
mod error;
mod fab;
mod item;
pub mod layout;
mod machine;
#[cfg(feature = "serde")]
mod settings;
mod trigger;
mod view;

pub use config::{
    DEFAULT_BUTTON_COLOR, DEFAULT_SETTLE_DELAY, LABEL_TEXT_COLOR, Position, RevealCurves, Shadow,
    TRANSPARENT, TextStyle, TriggerConfig, VerticalOrientation, WHITE,
};
pub use error::ConfigError;
pub use fab::{DEFAULT_ICON_COLORS, Fab, FabConfig, FabOption};
pub use item::{ActionItem, ItemStyle, LABEL_MARGIN};
pub use layout::{ItemSlot, Layout};
pub use machine::{Phase, PhaseMachine};
#[cfg(feature = "serde")]
pub use settings::{FabSettings, ItemSettings, TriggerSettings};
pub use trigger::{EXPANDED_ROTATION_DEGREES, Trigger};
pub use view::{
    BackdropView, GlyphView, HitTarget, ItemView, LabelView, PrimaryContent, PrimaryView,
    TriggerView,
};

/// Boxed press handler.
pub(crate) type Callback = Box<dyn FnMut()>;
