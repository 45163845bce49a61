// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serializable mirrors of the configuration types.
//!
//! Every field is optional and falls back to the typed default. Colors are
//! CSS color strings, keys are camelCase:
//!
//! ```
//! use overstory_fab::{TriggerConfig, TriggerSettings, VerticalOrientation};
//!
//! let settings: TriggerSettings = serde_json::from_str(
//!     r##"{ "buttonColor": "#e91e63", "verticalOrientation": "down", "spacing": 8 }"##,
//! ).unwrap();
//! let config = TriggerConfig::try_from(settings).unwrap();
//! assert_eq!(config.vertical_orientation, VerticalOrientation::Down);
//! assert_eq!(config.spacing, 8.0);
//! assert_eq!(config.size, 56.0);
//! ```

use core::time::Duration;

use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};

use crate::config::{Position, TriggerConfig, VerticalOrientation};
use crate::error::{ConfigError, check_finite, check_non_negative};
use crate::fab::{Fab, FabConfig, FabOption};
use crate::item::{ActionItem, ItemStyle};

/// Serialized form of [`TriggerConfig`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriggerSettings {
    /// Collapsed primary fill.
    pub button_color: Option<String>,
    /// Expanded primary fill.
    pub out_range_color: Option<String>,
    /// Expanded primary icon scale.
    pub out_range_scale: Option<f64>,
    /// Omit the primary shadow.
    pub hide_shadow: Option<bool>,
    /// Primary diameter.
    pub size: Option<f64>,
    /// Gap between slots.
    pub spacing: Option<f64>,
    /// Collapse after an item is selected.
    pub auto_inactive: Option<bool>,
    /// Collapse on backdrop taps.
    pub background_tappable: Option<bool>,
    /// `"up"` or `"down"`.
    pub vertical_orientation: Option<VerticalOrientation>,
    /// `"left"` or `"right"`.
    pub position: Option<Position>,
    /// Side inset.
    pub offset_x: Option<f64>,
    /// Bottom inset.
    pub offset_y: Option<f64>,
    /// Backdrop color.
    pub bg_color: Option<String>,
    /// Backdrop opacity.
    pub bg_opacity: Option<f64>,
    /// Settle delay in milliseconds.
    pub settle_delay_ms: Option<u64>,
}

impl TriggerSettings {
    /// Overwrites the fields of `config` that are set here.
    ///
    /// The result is validated; on error `config` may be partly updated.
    pub fn apply_to(&self, config: &mut TriggerConfig) -> Result<(), ConfigError> {
        if let Some(color) = &self.button_color {
            config.button_color = parse_css_color("buttonColor", color)?;
        }
        if let Some(color) = &self.out_range_color {
            config.out_range_color = Some(parse_css_color("outRangeColor", color)?);
        }
        if let Some(color) = &self.bg_color {
            config.bg_color = parse_css_color("bgColor", color)?;
        }
        set(&mut config.out_range_scale, self.out_range_scale);
        set(&mut config.hide_shadow, self.hide_shadow);
        set(&mut config.size, self.size);
        set(&mut config.spacing, self.spacing);
        set(&mut config.auto_inactive, self.auto_inactive);
        set(&mut config.background_tappable, self.background_tappable);
        set(&mut config.vertical_orientation, self.vertical_orientation);
        set(&mut config.position, self.position);
        set(&mut config.offset_x, self.offset_x);
        set(&mut config.offset_y, self.offset_y);
        set(&mut config.bg_opacity, self.bg_opacity);
        set(
            &mut config.settle_delay,
            self.settle_delay_ms.map(Duration::from_millis),
        );
        config.validate()
    }
}

impl TryFrom<TriggerSettings> for TriggerConfig {
    type Error = ConfigError;

    fn try_from(settings: TriggerSettings) -> Result<Self, Self::Error> {
        let mut config = Self::default();
        settings.apply_to(&mut config)?;
        Ok(config)
    }
}

/// Serialized form of an [`ActionItem`], without its callback.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemSettings {
    /// Label text.
    pub title: Option<String>,
    /// Glyph name.
    pub icon: Option<String>,
    /// Button fill.
    pub button_color: Option<String>,
    /// Glyph fill.
    pub glyph_color: Option<String>,
    /// Glyph size.
    pub glyph_size: Option<f64>,
    /// Label bubble fill.
    pub label_background: Option<String>,
    /// Label text fill.
    pub label_text_color: Option<String>,
    /// Label font size.
    pub label_font_size: Option<f64>,
    /// Omit the label shadow.
    pub hide_label_shadow: Option<bool>,
    /// Gap between label and button.
    pub space_between: Option<f64>,
    /// Button diameter.
    pub size: Option<f64>,
}

impl TryFrom<ItemSettings> for ActionItem {
    type Error = ConfigError;

    fn try_from(settings: ItemSettings) -> Result<Self, Self::Error> {
        let mut style = ItemStyle::default();
        if let Some(color) = &settings.button_color {
            style.button_color = parse_css_color("buttonColor", color)?;
        }
        if let Some(color) = &settings.glyph_color {
            style.glyph_color = parse_css_color("glyphColor", color)?;
        }
        if let Some(color) = &settings.label_background {
            style.label_background = parse_css_color("labelBackground", color)?;
        }
        if let Some(color) = &settings.label_text_color {
            style.label_text.color = parse_css_color("labelTextColor", color)?;
        }
        if let Some(size) = settings.glyph_size {
            style.glyph_size = check_non_negative("glyphSize", size)?;
        }
        if let Some(size) = settings.label_font_size {
            style.label_text.font_size = check_non_negative("labelFontSize", size)?;
        }
        if let Some(space) = settings.space_between {
            style.space_between = check_finite("spaceBetween", space)?;
        }
        if let Some(size) = settings.size {
            style.size = check_non_negative("size", size)?;
        }
        set(&mut style.hide_label_shadow, settings.hide_label_shadow);

        let mut item = Self::new().style(style);
        if let Some(title) = settings.title {
            item = item.title(title);
        }
        if let Some(icon) = settings.icon {
            item = item.glyph(icon);
        }
        Ok(item)
    }
}

/// Serialized form of a [`Fab`], without its callbacks.
///
/// Trigger fields sit at the top level next to the wrapper's own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FabSettings {
    /// Underlying trigger fields.
    #[serde(flatten)]
    pub trigger: TriggerSettings,
    /// Primary glyph name.
    pub icon: Option<String>,
    /// Primary glyph color.
    pub icon_color: Option<String>,
    /// Primary glyph size.
    pub icon_size: Option<f64>,
    /// Item palette.
    pub icon_colors: Option<Vec<String>>,
    /// Menu entries.
    pub options: Vec<FabOption>,
}

impl TryFrom<FabSettings> for FabConfig {
    type Error = ConfigError;

    fn try_from(settings: FabSettings) -> Result<Self, Self::Error> {
        let mut config = Self::default();
        settings.trigger.apply_to(&mut config.trigger)?;
        if let Some(icon) = settings.icon {
            config.icon = icon;
        }
        if let Some(color) = &settings.icon_color {
            config.icon_color = parse_css_color("iconColor", color)?;
        }
        if let Some(size) = settings.icon_size {
            config.icon_size = check_non_negative("iconSize", size)?;
        }
        if let Some(colors) = &settings.icon_colors {
            config.icon_colors = colors
                .iter()
                .map(|color| parse_css_color("iconColors", color))
                .collect::<Result<_, _>>()?;
        }
        Ok(config)
    }
}

impl TryFrom<FabSettings> for Fab {
    type Error = ConfigError;

    fn try_from(mut settings: FabSettings) -> Result<Self, Self::Error> {
        let options = core::mem::take(&mut settings.options);
        Ok(Self::new(FabConfig::try_from(settings)?).options(options))
    }
}

/// Parses a CSS color string for the field `field`.
fn parse_css_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    parse_color(value)
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|_| ConfigError::InvalidColor {
            field,
            value: value.to_owned(),
        })
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
