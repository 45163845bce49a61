// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame snapshots a renderer paints.
//!
//! A [`TriggerView`] is plain data: rectangles, colors, opacities and
//! transforms in container coordinates. It borrows nothing from the trigger
//! and can be kept around, diffed or sent elsewhere.

use kurbo::{Affine, Circle, Point, Rect, RoundedRect, Shape, Vec2};
use peniko::Color;
use understory_glyph::Glyph;

use crate::Phase;
use crate::config::{Position, RevealCurves, Shadow, TextStyle};
use crate::item::{ItemStyle, LABEL_MARGIN};
use crate::layout::ItemSlot;

/// What a hit test landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// The primary button.
    Primary,
    /// The action item in slot `n`.
    Item(usize),
    /// The dimmed backdrop behind the stack.
    Backdrop,
}

/// A resolved glyph with its paint parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphView {
    /// Glyph to draw.
    pub glyph: Glyph,
    /// Fill.
    pub color: Color,
    /// Font size.
    pub size: f64,
}

/// Content drawn inside the primary button.
#[derive(Clone, Debug, PartialEq)]
pub enum PrimaryContent {
    /// An icon glyph.
    Glyph(GlyphView),
    /// A short text, the `+` fallback by default.
    Text {
        /// Text to draw.
        text: String,
        /// Text paint.
        style: TextStyle,
    },
    /// Nothing; a named icon that did not resolve.
    Empty,
}

impl PrimaryContent {
    /// The `+` shown when no icon is configured.
    #[must_use]
    pub fn plus(style: TextStyle) -> Self {
        Self::Text {
            text: "+".into(),
            style,
        }
    }
}

/// The primary button.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimaryView {
    /// Square bounds; the button is the inscribed circle.
    pub rect: Rect,
    /// Fill, blended from the collapsed to the expanded color.
    pub fill: Color,
    /// Drop shadow, if enabled.
    pub shadow: Option<Shadow>,
    /// Icon or text.
    pub content: PrimaryContent,
    /// Content rotation in degrees.
    pub rotation_degrees: f64,
    /// Content scale.
    pub scale: f64,
    /// Rotation and scale about the button center, for the content only.
    pub content_transform: Affine,
}

impl PrimaryView {
    /// Circular outline of the button.
    #[must_use]
    pub fn circle(&self) -> Circle {
        button_circle(self.rect)
    }
}

/// The label bubble beside an action item.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelView {
    /// Label text.
    pub text: String,
    /// Bubble bounds before the item transform.
    pub rect: Rect,
    /// Bubble corner radius.
    pub corner_radius: f64,
    /// Bubble fill.
    pub background: Color,
    /// Text paint.
    pub text_style: TextStyle,
    /// Bubble shadow, if enabled.
    pub shadow: Option<Shadow>,
}

impl LabelView {
    /// Bubble outline before the item transform.
    #[must_use]
    pub fn rounded_rect(&self) -> RoundedRect {
        RoundedRect::from_rect(self.rect, self.corner_radius)
    }
}

/// One revealed action item.
///
/// `button` and the label rect are rest positions; `transform` moves and
/// scales the whole group into its current place.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemView {
    /// Slot index.
    pub index: usize,
    /// Button bounds at rest.
    pub button: Rect,
    /// Button fill.
    pub fill: Color,
    /// Button drop shadow, if enabled.
    pub shadow: Option<Shadow>,
    /// Button glyph; `None` when unset or unknown.
    pub glyph: Option<GlyphView>,
    /// Label bubble; `None` when the item has no title.
    pub label: Option<LabelView>,
    /// Group opacity.
    pub opacity: f64,
    /// Group scale about the button center.
    pub scale: f64,
    /// Group translation.
    pub translation: Vec2,
    /// `translation` after `scale`, as one transform.
    pub transform: Affine,
}

impl ItemView {
    /// Current on-screen bounds of the button.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.transform.transform_rect_bbox(self.button)
    }

    /// Returns `true` if `point` hits the button or the label.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let motion = ItemMotion {
            opacity: self.opacity,
            scale: self.scale,
            translation: self.translation,
            transform: self.transform,
        };
        motion.hits(point, self.button, self.label.as_ref().map(|l| l.rect))
    }
}

/// The dimmed layer covering the container behind the stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropView {
    /// Covered area.
    pub rect: Rect,
    /// Base color.
    pub color: Color,
    /// Current opacity, applied on top of `color`'s alpha.
    pub opacity: f64,
    /// Whether a tap here collapses the trigger.
    pub tappable: bool,
}

/// Everything to paint for one frame, back to front: backdrop, items,
/// primary button.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerView {
    /// Phase the snapshot was taken in.
    pub phase: Phase,
    /// Backdrop; present iff the trigger is mounted.
    pub backdrop: Option<BackdropView>,
    /// Well-formed items; empty unless the trigger is mounted.
    pub items: Vec<ItemView>,
    /// Primary button; always present.
    pub primary: PrimaryView,
}

impl TriggerView {
    /// Finds the topmost element under `point`.
    ///
    /// The primary button wins over items, items win over the backdrop.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        if self.primary.circle().contains(point) {
            return Some(HitTarget::Primary);
        }
        if let Some(item) = self.items.iter().rev().find(|item| item.contains(point)) {
            return Some(HitTarget::Item(item.index));
        }
        self.backdrop
            .filter(|backdrop| backdrop.rect.contains(point))
            .map(|_| HitTarget::Backdrop)
    }
}

/// Animated state of one item at an expansion value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ItemMotion {
    pub(crate) opacity: f64,
    pub(crate) scale: f64,
    pub(crate) translation: Vec2,
    pub(crate) transform: Affine,
}

impl ItemMotion {
    pub(crate) fn new(reveal: &RevealCurves, slot: &ItemSlot, expansion: f64) -> Self {
        let opacity = reveal.opacity.sample(expansion);
        let scale = reveal.scale.sample(expansion);
        let translation = Vec2::new(
            0.0,
            slot.reveal_offset * reveal.translate_progress(expansion),
        );
        let transform =
            Affine::translate(translation) * Affine::scale_about(scale, slot.rest.center());
        Self {
            opacity,
            scale,
            translation,
            transform,
        }
    }

    /// Hit test against the transformed button circle and label bubble.
    ///
    /// Invisible or collapsed items are never hit.
    pub(crate) fn hits(&self, point: Point, button: Rect, label: Option<Rect>) -> bool {
        if self.opacity <= 0.0 || self.scale <= 0.0 {
            return false;
        }
        let circle = Circle::new(
            self.transform * button.center(),
            button.width().min(button.height()) * 0.5 * self.scale,
        );
        circle.contains(point)
            || label.is_some_and(|rect| self.transform.transform_rect_bbox(rect).contains(point))
    }
}

/// Label bubble bounds beside `button`, on the side facing the container
/// center.
pub(crate) fn label_rect(button: Rect, style: &ItemStyle, position: Position) -> Rect {
    let gap = style.space_between + LABEL_MARGIN;
    let y0 = button.center().y - style.label_height * 0.5;
    let y1 = y0 + style.label_height;
    match position {
        Position::Right => {
            let x1 = button.x0 - gap;
            Rect::new(x1 - style.label_min_width, y0, x1, y1)
        }
        Position::Left => {
            let x0 = button.x1 + gap;
            Rect::new(x0, y0, x0 + style.label_min_width, y1)
        }
    }
}

pub(crate) fn button_circle(rect: Rect) -> Circle {
    Circle::new(rect.center(), rect.width().min(rect.height()) * 0.5)
}

/// Linear blend from `from` to `to` in sRGB with straight alpha.
pub(crate) fn mix(from: Color, to: Color, t: f64) -> Color {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "color components are f32; blend factors need no more precision"
    )]
    let t = t.clamp(0.0, 1.0) as f32;
    let mut components = from.components;
    for (c, target) in components.iter_mut().zip(to.components) {
        *c = *c * (1.0 - t) + target * t;
    }
    Color::new(components)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};
    use peniko::Color;

    use super::{ItemMotion, label_rect, mix};
    use crate::config::{Position, RevealCurves};
    use crate::item::ItemStyle;
    use crate::layout::ItemSlot;

    fn slot() -> ItemSlot {
        ItemSlot {
            index: 0,
            rest: Rect::new(100.0, 100.0, 150.0, 150.0),
            reveal_offset: -60.0,
        }
    }

    #[test]
    fn motion_at_rest_is_invisible() {
        let motion = ItemMotion::new(&RevealCurves::default(), &slot(), 0.0);
        assert_eq!(motion.opacity, 0.0);
        assert_eq!(motion.scale, 0.0);
        assert_eq!(motion.translation, Vec2::ZERO);
        assert!(!motion.hits(Point::new(125.0, 125.0), slot().rest, None));
    }

    #[test]
    fn fully_revealed_motion_translates_to_slot() {
        let motion = ItemMotion::new(&RevealCurves::default(), &slot(), 1.0);
        assert_eq!(motion.opacity, 1.0);
        assert_eq!(motion.scale, 1.0);
        assert_eq!(motion.transform * Point::new(125.0, 125.0), Point::new(125.0, 65.0));
        assert!(motion.hits(Point::new(125.0, 65.0), slot().rest, None));
        assert!(!motion.hits(Point::new(125.0, 125.0), slot().rest, None));
    }

    #[test]
    fn translate_range_is_independent() {
        let reveal = RevealCurves {
            translate_input: [0.0, 0.5],
            ..RevealCurves::default()
        };
        let motion = ItemMotion::new(&reveal, &slot(), 0.5);
        assert_eq!(motion.translation, Vec2::new(0.0, -60.0));
        assert_eq!(motion.opacity, 0.5);
    }

    #[test]
    fn labels_face_the_container_center() {
        let style = ItemStyle::default();
        let button = slot().rest;
        let right = label_rect(button, &style, Position::Right);
        assert_eq!(right.x1, button.x0 - 27.0);
        assert_eq!(right.width(), 100.0);
        assert_eq!(right.center().y, button.center().y);
        let left = label_rect(button, &style, Position::Left);
        assert_eq!(left.x0, button.x1 + 27.0);
        assert_eq!(left.height(), 36.0);
    }

    #[test]
    fn mix_blends_components() {
        let black = Color::new([0.0, 0.0, 0.0, 1.0]);
        let white = Color::new([1.0, 1.0, 1.0, 1.0]);
        assert_eq!(mix(black, white, 0.0), black);
        assert_eq!(mix(black, white, 1.0), white);
        assert_eq!(mix(black, white, 0.5).components, [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(mix(black, white, 7.0), white);
    }
}
