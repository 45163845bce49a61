// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use peniko::Color;

use crate::Callback;
use crate::config::{DEFAULT_BUTTON_COLOR, Shadow, TextStyle, WHITE};

/// Horizontal margin a label keeps from the item button, on top of
/// [`ItemStyle::space_between`].
pub const LABEL_MARGIN: f64 = 12.0;

/// Visual parameters of an [`ActionItem`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemStyle {
    /// Fill of the item button.
    pub button_color: Color,
    /// Diameter of the item button.
    pub size: f64,
    /// Gap between the label bubble and the button.
    pub space_between: f64,
    /// Shadow under the button, if any.
    pub shadow: Option<Shadow>,
    /// Color of the glyph inside the button.
    pub glyph_color: Color,
    /// Size of the glyph inside the button.
    pub glyph_size: f64,
    /// Fill of the label bubble.
    pub label_background: Color,
    /// Text of the label bubble.
    pub label_text: TextStyle,
    /// Label bubble width. Text is not measured, so bubbles never grow past it.
    pub label_min_width: f64,
    /// Label bubble height.
    pub label_height: f64,
    /// Label bubble corner radius.
    pub label_corner_radius: f64,
    /// Omit the label bubble's shadow.
    pub hide_label_shadow: bool,
    /// Replaces [`Shadow::LABEL`] under the label bubble.
    pub label_shadow: Option<Shadow>,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            button_color: DEFAULT_BUTTON_COLOR,
            size: 50.0,
            space_between: 15.0,
            shadow: Some(Shadow::BUTTON),
            glyph_color: WHITE,
            glyph_size: 20.0,
            label_background: WHITE,
            label_text: TextStyle::LABEL,
            label_min_width: 100.0,
            label_height: 36.0,
            label_corner_radius: 6.0,
            hide_label_shadow: false,
            label_shadow: None,
        }
    }
}

impl ItemStyle {
    /// Shadow to paint under the label bubble.
    #[must_use]
    pub fn effective_label_shadow(&self) -> Option<Shadow> {
        if self.hide_label_shadow {
            None
        } else {
            Some(self.label_shadow.unwrap_or(Shadow::LABEL))
        }
    }
}

/// One secondary action revealed by a [`Trigger`](crate::Trigger).
///
/// Items are descriptions only: they own no state and no animation. The
/// trigger places them, drives their reveal, and decides what happens after
/// their callback runs.
#[derive(Default)]
pub struct ActionItem {
    title: Option<String>,
    glyph: Option<String>,
    on_press: Option<Callback>,
    style: ItemStyle,
}

impl fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("title", &self.title)
            .field("glyph", &self.glyph)
            .field("on_press", &self.on_press.is_some())
            .field("style", &self.style)
            .finish()
    }
}

impl ActionItem {
    /// Creates an item with default style and no label, glyph or callback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label text; an empty title shows no label.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the glyph name resolved when the item is rendered.
    #[must_use]
    pub fn glyph(mut self, name: impl Into<String>) -> Self {
        self.glyph = Some(name.into());
        self
    }

    /// Sets the callback run when the item is selected.
    #[must_use]
    pub fn on_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    /// Replaces the whole style.
    #[must_use]
    pub fn style(mut self, style: ItemStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the button fill.
    #[must_use]
    pub fn button_color(mut self, color: Color) -> Self {
        self.style.button_color = color;
        self
    }

    /// Sets the button diameter.
    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.style.size = size;
        self
    }

    /// Sets the gap between label and button.
    #[must_use]
    pub fn space_between(mut self, space: f64) -> Self {
        self.style.space_between = space;
        self
    }

    /// Sets the label bubble fill.
    #[must_use]
    pub fn label_background(mut self, color: Color) -> Self {
        self.style.label_background = color;
        self
    }

    /// Sets the label text style.
    #[must_use]
    pub fn label_text(mut self, text: TextStyle) -> Self {
        self.style.label_text = text;
        self
    }

    /// Sets the glyph color and size.
    #[must_use]
    pub fn glyph_style(mut self, color: Color, size: f64) -> Self {
        self.style.glyph_color = color;
        self.style.glyph_size = size;
        self
    }

    /// Hides the label bubble's shadow.
    #[must_use]
    pub fn hide_label_shadow(mut self, hide: bool) -> Self {
        self.style.hide_label_shadow = hide;
        self
    }

    /// Label text, if a non-empty one was set.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Glyph name, if one was set.
    #[must_use]
    pub fn glyph_name(&self) -> Option<&str> {
        self.glyph.as_deref()
    }

    /// Visual parameters.
    #[must_use]
    pub fn item_style(&self) -> &ItemStyle {
        &self.style
    }

    /// Returns `true` if a callback is set.
    #[must_use]
    pub fn has_callback(&self) -> bool {
        self.on_press.is_some()
    }

    /// Runs the callback, if any.
    pub(crate) fn fire(&mut self) {
        if let Some(on_press) = self.on_press.as_mut() {
            on_press();
        }
    }
}
