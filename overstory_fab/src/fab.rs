// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options-driven wrapper that assembles a [`Trigger`].

use core::fmt;
use std::cell::RefCell;
#[cfg(feature = "serde")]
use std::collections::BTreeMap;
use std::rc::Rc;

use peniko::Color;

use crate::Callback;
use crate::config::{TextStyle, TriggerConfig, WHITE};
use crate::item::ActionItem;
use crate::trigger::Trigger;

/// Item colors used by [`Fab`] unless overridden.
pub const DEFAULT_ICON_COLORS: [Color; 8] = [
    Color::from_rgb8(0xff, 0x6b, 0x6b),
    Color::from_rgb8(0x4e, 0xcd, 0xc4),
    Color::from_rgb8(0x45, 0xb7, 0xd1),
    Color::from_rgb8(0x96, 0xce, 0xb4),
    Color::from_rgb8(0xff, 0xea, 0xa7),
    Color::from_rgb8(0xdd, 0xa0, 0xdd),
    Color::from_rgb8(0x98, 0xd8, 0xc8),
    Color::from_rgb8(0xf7, 0xdc, 0x6f),
];

/// One entry of a [`Fab`]'s menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FabOption {
    /// Label text.
    pub title: String,
    /// Glyph name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<String>,
    /// Navigation target handed to the option callback.
    #[cfg_attr(feature = "serde", serde(default))]
    pub screen: Option<String>,
    /// Any further fields of the option's JSON object, kept as-is.
    #[cfg(feature = "serde")]
    #[serde(flatten)]
    pub data: BTreeMap<String, serde_json::Value>,
}

impl FabOption {
    /// Creates an option with a title only.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the glyph name.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the navigation target.
    #[must_use]
    pub fn with_screen(mut self, screen: impl Into<String>) -> Self {
        self.screen = Some(screen.into());
        self
    }
}

/// Plain values of a [`Fab`].
#[derive(Clone, Debug, PartialEq)]
pub struct FabConfig {
    /// Configuration of the underlying trigger.
    pub trigger: TriggerConfig,
    /// Glyph name on the primary button.
    pub icon: String,
    /// Primary glyph color.
    pub icon_color: Color,
    /// Primary glyph size.
    pub icon_size: f64,
    /// Item colors, cycled by index. Empty keeps the item default.
    pub icon_colors: Vec<Color>,
    /// Item glyph color.
    pub item_glyph_color: Color,
    /// Item glyph size.
    pub item_glyph_size: f64,
    /// Label bubble fill.
    pub label_background: Color,
    /// Label text.
    pub label_text: TextStyle,
}

impl Default for FabConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerConfig {
                hide_shadow: true,
                background_tappable: true,
                ..TriggerConfig::default()
            },
            icon: "plus".into(),
            icon_color: WHITE,
            icon_size: 24.0,
            icon_colors: DEFAULT_ICON_COLORS.to_vec(),
            item_glyph_color: WHITE,
            item_glyph_size: 20.0,
            label_background: WHITE,
            label_text: TextStyle::LABEL,
        }
    }
}

impl FabConfig {
    /// Palette color for the item at `index`.
    #[must_use]
    pub fn item_color(&self, index: usize) -> Option<Color> {
        if self.icon_colors.is_empty() {
            None
        } else {
            Some(self.icon_colors[index % self.icon_colors.len()])
        }
    }
}

type OptionCallback = Box<dyn FnMut(Option<&str>, &FabOption)>;

/// A floating action button built from a list of [`FabOption`]s.
///
/// With options it expands into one item per option; without options it is
/// a plain button that only calls its press callback.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use overstory_fab::{Fab, FabOption};
///
/// let visited = Rc::new(RefCell::new(Vec::new()));
/// let log = Rc::clone(&visited);
/// let mut trigger = Fab::default()
///     .option(FabOption::new("Profile").with_screen("profile"))
///     .on_option_press(move |screen, _| log.borrow_mut().push(screen.map(str::to_owned)))
///     .build();
///
/// trigger.press();
/// trigger.press_item(0);
/// assert_eq!(*visited.borrow(), [Some("profile".to_owned())]);
/// ```
#[derive(Default)]
pub struct Fab {
    config: FabConfig,
    options: Vec<FabOption>,
    on_press: Option<Callback>,
    on_option_press: Option<OptionCallback>,
}

impl fmt::Debug for Fab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fab")
            .field("config", &self.config)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Fab {
    /// Creates a wrapper with `config` and no options.
    #[must_use]
    pub fn new(config: FabConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Appends an option.
    #[must_use]
    pub fn option(mut self, option: FabOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends several options.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = FabOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Sets the callback for primary taps.
    ///
    /// Only used when there are no options; with options a primary tap just
    /// toggles the stack.
    #[must_use]
    pub fn on_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    /// Sets the callback for option taps; it receives the option's screen.
    #[must_use]
    pub fn on_option_press(mut self, f: impl FnMut(Option<&str>, &FabOption) + 'static) -> Self {
        self.on_option_press = Some(Box::new(f));
        self
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &FabConfig {
        &self.config
    }

    /// Options in order.
    #[must_use]
    pub fn option_list(&self) -> &[FabOption] {
        &self.options
    }

    /// Assembles the trigger.
    #[must_use]
    pub fn build(self) -> Trigger {
        let Self {
            config,
            options,
            on_press,
            on_option_press,
        } = self;

        let mut trigger = Trigger::new(config.trigger.clone()).icon(
            config.icon.clone(),
            config.icon_color,
            config.icon_size,
        );
        if options.is_empty() {
            tracing::debug!("building fab without options");
            if let Some(on_press) = on_press {
                trigger = trigger.on_press(on_press);
            }
            return trigger;
        }

        let shared = on_option_press.map(|f| Rc::new(RefCell::new(f)));
        let items = options.into_iter().enumerate().map(|(index, option)| {
            let mut item = ActionItem::new()
                .title(option.title.clone())
                .glyph_style(config.item_glyph_color, config.item_glyph_size)
                .label_background(config.label_background)
                .label_text(config.label_text);
            if let Some(color) = config.item_color(index) {
                item = item.button_color(color);
            }
            if let Some(icon) = &option.icon {
                item = item.glyph(icon.clone());
            }
            if let Some(callback) = shared.clone() {
                item = item.on_press(move || {
                    if let Ok(mut callback) = callback.try_borrow_mut() {
                        (*callback)(option.screen.as_deref(), &option);
                    }
                });
            }
            Some(item)
        });
        trigger.with_slots(items)
    }
}
