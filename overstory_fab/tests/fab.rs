// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the options-driven `Fab` wrapper.

use core::time::Duration;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::Size;
use overstory_fab::{
    DEFAULT_ICON_COLORS, Fab, FabConfig, FabOption, ItemStyle, Phase, PrimaryContent,
};
use understory_glyph::{GlyphRegistry, SOLID_FAMILY};

const CONTAINER: Size = Size::new(360.0, 640.0);

#[test]
fn without_options_it_is_a_plain_button() {
    let presses = Rc::new(Cell::new(0));
    let counter = Rc::clone(&presses);
    let mut trigger = Fab::default()
        .on_press(move || counter.set(counter.get() + 1))
        .build();
    assert!(!trigger.has_items());

    for expected in 1..=3 {
        trigger.press();
        trigger.advance(Duration::from_millis(300));
        assert_eq!(presses.get(), expected);
        assert_eq!(trigger.phase(), Phase::Closed);
        let view = trigger.view(CONTAINER, &GlyphRegistry::solid_icons());
        assert!(view.backdrop.is_none());
        assert!(view.items.is_empty());
    }
}

#[test]
fn with_options_primary_tap_only_toggles() {
    let presses = Rc::new(Cell::new(0));
    let counter = Rc::clone(&presses);
    let mut trigger = Fab::default()
        .option(FabOption::new("A"))
        .on_press(move || counter.set(counter.get() + 1))
        .build();

    trigger.press();
    assert_eq!(trigger.phase(), Phase::Opening);
    trigger.press();
    assert_eq!(trigger.phase(), Phase::Closing);
    assert_eq!(presses.get(), 0);
}

#[test]
fn primary_shows_the_plus_glyph() {
    let trigger = Fab::default().build();
    let view = trigger.view(CONTAINER, &GlyphRegistry::solid_icons());
    let PrimaryContent::Glyph(glyph) = &view.primary.content else {
        panic!("expected a glyph, got {:?}", view.primary.content);
    };
    assert_eq!(glyph.glyph.family, SOLID_FAMILY);
    assert_eq!(glyph.size, 24.0);
    assert!(view.primary.shadow.is_none());
}

#[test]
fn item_colors_cycle_through_the_palette() {
    let options = (0..10).map(|i| FabOption::new(format!("Option {i}")));
    let trigger = Fab::default().options(options).build();
    let colors: Vec<_> = trigger
        .slots()
        .iter()
        .map(|slot| slot.as_ref().unwrap().item_style().button_color)
        .collect();
    assert_eq!(colors.len(), 10);
    assert_eq!(colors[..8], DEFAULT_ICON_COLORS);
    assert_eq!(colors[8], DEFAULT_ICON_COLORS[0]);
    assert_eq!(colors[9], DEFAULT_ICON_COLORS[1]);
}

#[test]
fn empty_palette_keeps_item_default() {
    let config = FabConfig {
        icon_colors: Vec::new(),
        ..FabConfig::default()
    };
    let trigger = Fab::new(config).option(FabOption::new("Only")).build();
    let item = trigger.slots()[0].as_ref().unwrap();
    assert_eq!(
        item.item_style().button_color,
        ItemStyle::default().button_color
    );
}

#[test]
fn option_taps_report_their_screen() {
    let visits = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&visits);
    let mut trigger = Fab::default()
        .option(FabOption::new("Home").with_icon("home").with_screen("home"))
        .option(FabOption::new("Help"))
        .on_option_press(move |screen, option| {
            log.borrow_mut()
                .push((screen.map(str::to_owned), option.title.clone()));
        })
        .build();

    trigger.press();
    assert!(trigger.press_item(0));
    assert_eq!(trigger.phase(), Phase::Closing);
    trigger.press();
    assert!(trigger.press_item(1));

    assert_eq!(
        *visits.borrow(),
        [
            (Some("home".to_owned()), "Home".to_owned()),
            (None, "Help".to_owned()),
        ]
    );
}

#[test]
fn backdrop_dismisses_by_default() {
    let mut trigger = Fab::default().option(FabOption::new("A")).build();
    trigger.press();
    assert!(trigger.press_backdrop());
    assert_eq!(trigger.phase(), Phase::Closing);
}
