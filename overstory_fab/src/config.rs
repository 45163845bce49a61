// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Vec2;
use peniko::Color;
use understory_motion::{Curve, Interpolation, Spring, Timing};

use crate::error::{ConfigError, check_finite, check_non_negative, check_opacity};

/// Default fill of the primary button and of action items.
pub const DEFAULT_BUTTON_COLOR: Color = Color::from_rgb8(0x12, 0x53, 0xbc);

/// Fully transparent black, the default backdrop color.
pub const TRANSPARENT: Color = Color::from_rgba8(0, 0, 0, 0);

/// Opaque white.
pub const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

/// Default label text color.
pub const LABEL_TEXT_COLOR: Color = Color::from_rgb8(0x33, 0x33, 0x33);

/// Time the stack stays mounted after a collapse starts.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(250);

/// Which side of the container the button hugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    /// Anchored `offset_x` from the left edge.
    Left,
    /// Anchored `offset_x` from the right edge.
    #[default]
    Right,
}

/// Direction the action items travel when revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerticalOrientation {
    /// Items stack above the primary button.
    #[default]
    Up,
    /// Items stack below the primary button.
    Down,
}

impl VerticalOrientation {
    /// Sign of the reveal translation in y-down coordinates.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Up => -1.0,
            Self::Down => 1.0,
        }
    }
}

/// A drop shadow a renderer should paint under a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color including its opacity.
    pub color: Color,
    /// Offset from the shape.
    pub offset: Vec2,
    /// Blur radius.
    pub blur_radius: f64,
}

impl Shadow {
    /// Shadow under circular buttons.
    pub const BUTTON: Self = Self {
        color: Color::new([0.0, 0.0, 0.0, 0.25]),
        offset: Vec2::new(0.0, 2.0),
        blur_radius: 3.84,
    };

    /// Shadow under label bubbles.
    pub const LABEL: Self = Self {
        color: Color::new([0.0, 0.0, 0.0, 0.3]),
        offset: Vec2::new(0.0, 2.0),
        blur_radius: 3.0,
    };
}

/// Color and size of a run of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Fill color.
    pub color: Color,
    /// Font size.
    pub font_size: f64,
    /// Whether to use a bold weight.
    pub bold: bool,
}

impl TextStyle {
    /// The `+` drawn on a primary button without an icon.
    pub const PRIMARY: Self = Self {
        color: WHITE,
        font_size: 24.0,
        bold: true,
    };

    /// Text inside item labels.
    pub const LABEL: Self = Self {
        color: LABEL_TEXT_COLOR,
        font_size: 14.0,
        bold: true,
    };
}

/// How action items read the expansion channel.
///
/// Opacity, scale and translation are tuned independently. The translation
/// only carries an input range because its output depends on the item index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealCurves {
    /// Item opacity.
    pub opacity: Interpolation,
    /// Item scale.
    pub scale: Interpolation,
    /// Input range over which items travel to their slot.
    pub translate_input: [f64; 2],
}

impl RevealCurves {
    /// Progress of the reveal translation for an expansion value.
    #[must_use]
    pub fn translate_progress(&self, expansion: f64) -> f64 {
        Interpolation::new(self.translate_input, [0.0, 1.0]).sample(expansion)
    }
}

impl Default for RevealCurves {
    fn default() -> Self {
        Self {
            opacity: Interpolation::unit([0.0, 1.0]).clamped(),
            scale: Interpolation::unit([0.0, 1.0]),
            translate_input: [0.0, 1.0],
        }
    }
}

/// Configuration of a [`Trigger`](crate::Trigger).
///
/// Handlers, the primary icon and the action items are set on the trigger
/// itself; this struct only holds plain values.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerConfig {
    /// Fill of the primary button while collapsed.
    pub button_color: Color,
    /// Fill of the primary button while expanded; `None` keeps `button_color`.
    pub out_range_color: Option<Color>,
    /// Scale of the primary icon while expanded.
    pub out_range_scale: f64,
    /// Omit the primary button's shadow.
    pub hide_shadow: bool,
    /// Diameter of the primary button.
    pub size: f64,
    /// Extra gap between stacked slots.
    pub spacing: f64,
    /// Collapse automatically after an item is selected.
    pub auto_inactive: bool,
    /// Collapse when the backdrop is tapped.
    pub background_tappable: bool,
    /// Direction items travel when revealed.
    pub vertical_orientation: VerticalOrientation,
    /// Side of the container the button hugs.
    pub position: Position,
    /// Horizontal inset from the `position` side.
    pub offset_x: f64,
    /// Inset from the bottom edge.
    pub offset_y: f64,
    /// Backdrop color.
    pub bg_color: Color,
    /// Backdrop opacity when fully dimmed.
    pub bg_opacity: f64,
    /// Time the stack stays mounted after a collapse starts.
    pub settle_delay: Duration,
    /// How items read the expansion channel.
    pub reveal: RevealCurves,
    /// Curve driving rotation, scale and item reveal.
    pub expansion_curve: Curve,
    /// Curve driving the backdrop.
    pub dim_curve: Curve,
    /// Style of the fallback `+` on a primary button without an icon.
    pub button_text: TextStyle,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            button_color: DEFAULT_BUTTON_COLOR,
            out_range_color: None,
            out_range_scale: 1.0,
            hide_shadow: false,
            size: 56.0,
            spacing: 0.0,
            auto_inactive: true,
            background_tappable: false,
            vertical_orientation: VerticalOrientation::Up,
            position: Position::Right,
            offset_x: 30.0,
            offset_y: 50.0,
            bg_color: TRANSPARENT,
            bg_opacity: 0.6,
            settle_delay: DEFAULT_SETTLE_DELAY,
            reveal: RevealCurves::default(),
            expansion_curve: Curve::Spring(Spring::default()),
            dim_curve: Curve::Timing(Timing::default()),
            button_text: TextStyle::PRIMARY,
        }
    }
}

impl TriggerConfig {
    /// Checks that every numeric field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("size", self.size)?;
        check_finite("spacing", self.spacing)?;
        check_finite("offset_x", self.offset_x)?;
        check_finite("offset_y", self.offset_y)?;
        check_non_negative("out_range_scale", self.out_range_scale)?;
        check_opacity("bg_opacity", self.bg_opacity)?;
        Ok(())
    }

    /// Returns a copy with unusable numeric fields replaced by defaults.
    ///
    /// Opacity is clamped rather than reset.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut config = self.clone();
        if check_non_negative("size", config.size).is_err() {
            config.size = defaults.size;
        }
        if !config.spacing.is_finite() {
            config.spacing = defaults.spacing;
        }
        if !config.offset_x.is_finite() {
            config.offset_x = defaults.offset_x;
        }
        if !config.offset_y.is_finite() {
            config.offset_y = defaults.offset_y;
        }
        if check_non_negative("out_range_scale", config.out_range_scale).is_err() {
            config.out_range_scale = defaults.out_range_scale;
        }
        config.bg_opacity = if config.bg_opacity.is_nan() {
            defaults.bg_opacity
        } else {
            config.bg_opacity.clamp(0.0, 1.0)
        };
        if config != *self {
            tracing::debug!("replaced invalid trigger configuration values");
        }
        config
    }

    /// Fill of the primary button while expanded.
    #[must_use]
    pub fn expanded_color(&self) -> Color {
        self.out_range_color.unwrap_or(self.button_color)
    }

    /// Height of one stacked slot.
    #[must_use]
    pub fn slot_extent(&self) -> f64 {
        self.size + self.spacing
    }
}
