// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::time::Duration;

use kurbo::{Affine, Point, Shape, Size};
use peniko::Color;
use understory_glyph::{GlyphResolver, resolve_logged};
use understory_motion::{Channel, Interpolation};

use crate::Callback;
use crate::config::{Shadow, TriggerConfig};
use crate::item::ActionItem;
use crate::layout::Layout;
use crate::machine::{Phase, PhaseMachine};
use crate::view::{
    BackdropView, GlyphView, HitTarget, ItemMotion, ItemView, LabelView, PrimaryContent,
    PrimaryView, TriggerView, button_circle, label_rect, mix,
};

/// Rotation of the primary content when fully expanded.
pub const EXPANDED_ROTATION_DEGREES: f64 = 45.0;

struct PrimaryIcon {
    name: String,
    color: Color,
    size: f64,
}

/// An expandable floating action button.
///
/// The trigger owns its configuration, its action item slots, the
/// open/closed [`Phase`] and two animation channels: `expansion` drives the
/// primary rotation and the item reveal, `dim` drives the backdrop. Input is
/// delivered through [`press`](Self::press), [`press_item`](Self::press_item)
/// and friends (or [`tap_at`](Self::tap_at) for raw coordinates); time only
/// moves in [`advance`](Self::advance).
///
/// ```
/// use core::time::Duration;
/// use kurbo::Size;
/// use overstory_fab::{ActionItem, Phase, Trigger, TriggerConfig};
/// use understory_glyph::NoGlyphs;
///
/// let mut fab = Trigger::new(TriggerConfig::default())
///     .with_item(ActionItem::new().title("Share"))
///     .with_item(ActionItem::new().title("Edit"));
///
/// fab.press();
/// assert_eq!(fab.phase(), Phase::Opening);
/// while fab.needs_frame() {
///     fab.advance(Duration::from_millis(16));
/// }
/// assert_eq!(fab.phase(), Phase::Open);
///
/// let view = fab.view(Size::new(400.0, 800.0), &NoGlyphs);
/// assert_eq!(view.items.len(), 2);
/// assert!(view.backdrop.is_some());
/// ```
pub struct Trigger {
    config: TriggerConfig,
    machine: PhaseMachine,
    expansion: Channel,
    dim: Channel,
    slots: Vec<Option<ActionItem>>,
    on_press: Option<Callback>,
    on_long_press: Option<Callback>,
    icon: Option<PrimaryIcon>,
    render_icon: Option<Box<dyn Fn() -> PrimaryContent>>,
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("config", &self.config)
            .field("machine", &self.machine)
            .field("expansion", &self.expansion)
            .field("dim", &self.dim)
            .field("slots", &self.slots)
            .field("icon", &self.icon.as_ref().map(|icon| &icon.name))
            .finish_non_exhaustive()
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::new(TriggerConfig::default())
    }
}

impl Trigger {
    /// Creates a closed trigger without items.
    ///
    /// Unusable numbers in `config` are replaced; see
    /// [`TriggerConfig::sanitized`].
    #[must_use]
    pub fn new(config: TriggerConfig) -> Self {
        let config = config.sanitized();
        Self {
            machine: PhaseMachine::new(config.settle_delay),
            config,
            expansion: Channel::new(0.0),
            dim: Channel::new(0.0),
            slots: Vec::new(),
            on_press: None,
            on_long_press: None,
            icon: None,
            render_icon: None,
        }
    }

    /// Appends an action item.
    #[must_use]
    pub fn with_item(self, item: ActionItem) -> Self {
        self.with_slot(Some(item))
    }

    /// Appends a slot; `None` occupies its index but renders nothing.
    #[must_use]
    pub fn with_slot(mut self, slot: Option<ActionItem>) -> Self {
        self.slots.push(slot);
        self
    }

    /// Appends several slots.
    #[must_use]
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = Option<ActionItem>>) -> Self {
        self.slots.extend(slots);
        self
    }

    /// Sets the callback run on every primary tap.
    #[must_use]
    pub fn on_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    /// Sets the callback run on a primary long press.
    #[must_use]
    pub fn on_long_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_long_press = Some(Box::new(f));
        self
    }

    /// Shows the named glyph on the primary button instead of `+`.
    #[must_use]
    pub fn icon(mut self, name: impl Into<String>, color: Color, size: f64) -> Self {
        self.icon = Some(PrimaryIcon {
            name: name.into(),
            color,
            size,
        });
        self
    }

    /// Replaces the primary content with whatever `render` returns.
    ///
    /// Takes precedence over [`icon`](Self::icon).
    #[must_use]
    pub fn render_icon(mut self, render: impl Fn() -> PrimaryContent + 'static) -> Self {
        self.render_icon = Some(Box::new(render));
        self
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Item slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Option<ActionItem>] {
        &self.slots
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Returns `true` while opening or open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase().is_open()
    }

    /// Returns `true` while the stack and backdrop are rendered.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase().is_mounted()
    }

    /// Returns `true` if at least one slot holds an item.
    ///
    /// Without items the trigger is a plain button and never expands.
    #[must_use]
    pub fn has_items(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Expansion channel value.
    #[must_use]
    pub fn expansion(&self) -> f64 {
        self.expansion.value()
    }

    /// Backdrop channel value.
    #[must_use]
    pub fn dim(&self) -> f64 {
        self.dim.value()
    }

    /// Returns `true` while [`advance`](Self::advance) still has work to do.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        !self.expansion.is_settled() || !self.dim.is_settled() || self.phase().is_transitioning()
    }

    /// Opens the stack.
    ///
    /// Also reopens a closing trigger, discarding its pending collapse.
    /// Returns `false` if already open or there are no items.
    pub fn activate(&mut self) -> bool {
        if !self.has_items() {
            tracing::trace!("activate ignored: no items");
            return false;
        }
        let from = self.phase();
        if !self.machine.activate() {
            return false;
        }
        self.expansion.set_target(1.0, self.config.expansion_curve);
        self.dim.set_target(1.0, self.config.dim_curve);
        tracing::debug!(?from, to = ?self.phase(), "trigger activated");
        true
    }

    /// Starts collapsing the stack.
    ///
    /// The stack stays mounted for the configured settle delay. Returns
    /// `false` if already closing or closed.
    pub fn deactivate(&mut self) -> bool {
        let from = self.phase();
        if !self.machine.deactivate() {
            return false;
        }
        self.expansion.set_target(0.0, self.config.expansion_curve);
        self.dim.set_target(0.0, self.config.dim_curve);
        tracing::debug!(?from, to = ?self.phase(), "trigger deactivated");
        true
    }

    /// Handles a tap on the primary button.
    ///
    /// Runs the press callback, then toggles the stack if there is one.
    /// While the stack is still mounted, including during [`Phase::Closing`],
    /// a tap collapses it and leaves a pending settle deadline untouched.
    pub fn press(&mut self) {
        if let Some(on_press) = self.on_press.as_mut() {
            on_press();
        }
        if !self.has_items() {
            return;
        }
        if self.is_mounted() {
            self.deactivate();
        } else {
            self.activate();
        }
    }

    /// Handles a long press on the primary button.
    pub fn long_press(&mut self) {
        if let Some(on_long_press) = self.on_long_press.as_mut() {
            on_long_press();
        }
    }

    /// Handles a tap on the item in slot `index`.
    ///
    /// Returns `false`, doing nothing, while closed or for an empty or
    /// missing slot.
    pub fn press_item(&mut self, index: usize) -> bool {
        if !self.is_mounted() {
            tracing::trace!(index, "item press ignored: closed");
            return false;
        }
        let Some(item) = self.slots.get_mut(index).and_then(Option::as_mut) else {
            tracing::trace!(index, "item press ignored: no item in slot");
            return false;
        };
        item.fire();
        if self.config.auto_inactive {
            self.deactivate();
        }
        true
    }

    /// Handles a tap on the backdrop.
    ///
    /// Returns `true` if the tap started a collapse.
    pub fn press_backdrop(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        if !self.config.background_tappable {
            tracing::trace!("backdrop tap absorbed");
            return false;
        }
        self.deactivate()
    }

    /// Advances animations and the settle timer by `dt`.
    ///
    /// Returns `true` if anything visible changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let moved = self.expansion.step(dt) | self.dim.step(dt);
        let at_rest_open = self.expansion.is_settled()
            && self.dim.is_settled()
            && self.expansion.value() == 1.0
            && self.dim.value() == 1.0;
        let from = self.phase();
        let changed = self.machine.advance(dt, at_rest_open);
        if let Some(to) = changed {
            tracing::debug!(?from, ?to, "trigger phase changed");
        }
        moved || changed.is_some()
    }

    /// Geometry for `container`.
    #[must_use]
    pub fn layout(&self, container: Size) -> Layout {
        Layout::new(&self.config, container)
    }

    /// Snapshot of everything to paint in `container`.
    ///
    /// Glyph names go through `glyphs`; unknown names are logged and drawn
    /// as empty slots.
    pub fn view<R: GlyphResolver + ?Sized>(&self, container: Size, glyphs: &R) -> TriggerView {
        let layout = self.layout(container);
        let expansion = self.expansion.value();
        let phase = self.phase();

        let backdrop = phase.is_mounted().then(|| BackdropView {
            rect: layout.backdrop(),
            color: self.config.bg_color,
            opacity: self.dim.value() * self.config.bg_opacity,
            tappable: self.config.background_tappable,
        });

        let items = if phase.is_mounted() {
            self.slots
                .iter()
                .enumerate()
                .filter_map(|(index, slot)| Some((index, slot.as_ref()?)))
                .map(|(index, item)| self.item_view(&layout, index, item, expansion, glyphs))
                .collect()
        } else {
            Vec::new()
        };

        TriggerView {
            phase,
            backdrop,
            items,
            primary: self.primary_view(&layout, expansion, glyphs),
        }
    }

    /// Finds the topmost element under `point` without resolving glyphs.
    #[must_use]
    pub fn hit_test(&self, container: Size, point: Point) -> Option<HitTarget> {
        let layout = self.layout(container);
        if button_circle(layout.primary()).contains(point) {
            return Some(HitTarget::Primary);
        }
        if !self.is_mounted() {
            return None;
        }
        let expansion = self.expansion.value();
        let hit_item = self
            .slots
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(index, slot)| Some((index, slot.as_ref()?)))
            .find(|(index, item)| {
                let style = item.item_style();
                let slot = layout.item(*index, style.size);
                let label = item
                    .label()
                    .map(|_| label_rect(slot.rest, style, self.config.position));
                ItemMotion::new(&self.config.reveal, &slot, expansion).hits(point, slot.rest, label)
            });
        if let Some((index, _)) = hit_item {
            return Some(HitTarget::Item(index));
        }
        layout
            .backdrop()
            .contains(point)
            .then_some(HitTarget::Backdrop)
    }

    /// Routes a tap at `point` to whatever it hits.
    ///
    /// Returns the target, or `None` if the tap missed everything.
    pub fn tap_at(&mut self, container: Size, point: Point) -> Option<HitTarget> {
        let target = self.hit_test(container, point)?;
        match target {
            HitTarget::Primary => self.press(),
            HitTarget::Item(index) => {
                self.press_item(index);
            }
            HitTarget::Backdrop => {
                self.press_backdrop();
            }
        }
        Some(target)
    }

    fn primary_view<R: GlyphResolver + ?Sized>(
        &self,
        layout: &Layout,
        expansion: f64,
        glyphs: &R,
    ) -> PrimaryView {
        let rect = layout.primary();
        let rotation_degrees =
            Interpolation::unit([0.0, EXPANDED_ROTATION_DEGREES]).sample(expansion);
        let scale = Interpolation::unit([1.0, self.config.out_range_scale]).sample(expansion);
        let center = rect.center();
        let content_transform = Affine::rotate_about(rotation_degrees.to_radians(), center)
            * Affine::scale_about(scale, center);

        let content = if let Some(render) = &self.render_icon {
            render()
        } else if let Some(icon) = &self.icon {
            resolve_logged(glyphs, &icon.name).map_or(PrimaryContent::Empty, |glyph| {
                PrimaryContent::Glyph(GlyphView {
                    glyph,
                    color: icon.color,
                    size: icon.size,
                })
            })
        } else {
            PrimaryContent::plus(self.config.button_text)
        };

        PrimaryView {
            rect,
            fill: mix(
                self.config.button_color,
                self.config.expanded_color(),
                expansion,
            ),
            shadow: (!self.config.hide_shadow).then_some(Shadow::BUTTON),
            content,
            rotation_degrees,
            scale,
            content_transform,
        }
    }

    fn item_view<R: GlyphResolver + ?Sized>(
        &self,
        layout: &Layout,
        index: usize,
        item: &ActionItem,
        expansion: f64,
        glyphs: &R,
    ) -> ItemView {
        let style = item.item_style();
        let slot = layout.item(index, style.size);
        let motion = ItemMotion::new(&self.config.reveal, &slot, expansion);

        let glyph = item
            .glyph_name()
            .and_then(|name| resolve_logged(glyphs, name))
            .map(|glyph| GlyphView {
                glyph,
                color: style.glyph_color,
                size: style.glyph_size,
            });
        let label = item.label().map(|text| LabelView {
            text: text.to_owned(),
            rect: label_rect(slot.rest, style, self.config.position),
            corner_radius: style.label_corner_radius,
            background: style.label_background,
            text_style: style.label_text,
            shadow: style.effective_label_shadow(),
        });

        ItemView {
            index,
            button: slot.rest,
            fill: style.button_color,
            shadow: if self.config.hide_shadow {
                None
            } else {
                style.shadow
            },
            glyph,
            label,
            opacity: motion.opacity,
            scale: motion.scale,
            translation: motion.translation,
            transform: motion.transform,
        }
    }
}
