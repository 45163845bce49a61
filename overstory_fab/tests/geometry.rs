// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the primary button and the revealed stack.

use core::time::Duration;

use kurbo::{Point, Size};
use overstory_fab::{
    ActionItem, HitTarget, Position, PrimaryContent, Trigger, TriggerConfig, TriggerView,
    VerticalOrientation,
};
use understory_glyph::{GlyphRegistry, NoGlyphs};

const CONTAINER: Size = Size::new(400.0, 800.0);

fn open_view(config: TriggerConfig, n: usize) -> (Trigger, TriggerView) {
    let mut trigger = (0..n).fold(Trigger::new(config), |trigger, _| {
        trigger.with_item(ActionItem::new().title("Action"))
    });
    trigger.press();
    while trigger.needs_frame() {
        trigger.advance(Duration::from_millis(16));
    }
    let view = trigger.view(CONTAINER, &NoGlyphs);
    (trigger, view)
}

#[test]
fn revealed_items_are_stacked_one_slot_apart() {
    for orientation in [VerticalOrientation::Up, VerticalOrientation::Down] {
        for n in [0_usize, 1, 5] {
            let config = TriggerConfig {
                vertical_orientation: orientation,
                spacing: 4.0,
                ..TriggerConfig::default()
            };
            let (trigger, view) = open_view(config.clone(), n);
            assert_eq!(view.items.len(), n);
            assert_eq!(trigger.is_mounted(), n > 0);

            let primary = trigger.layout(CONTAINER).primary();
            assert_eq!(view.primary.rect, primary);
            for (i, item) in view.items.iter().enumerate() {
                let slots = (i + 1) as f64;
                let bounds = item.bounds();
                assert_eq!(bounds.x1, 400.0 - 38.0);
                assert_eq!(bounds.y1, 750.0 + orientation.sign() * slots * 60.0);
                assert_eq!(item.opacity, 1.0);
            }

            // Same inputs, same geometry.
            let (_, again) = open_view(config, n);
            assert_eq!(view, again);
        }
    }
}

#[test]
fn first_item_rests_on_the_stack_anchor() {
    let (trigger, view) = open_view(TriggerConfig::default(), 2);
    let anchor = trigger.layout(CONTAINER).stack_anchor();
    assert_eq!(anchor, Point::new(362.0, 694.0));
    let first = view.items[0].bounds();
    assert_eq!(Point::new(first.x1, first.y1), anchor);
}

#[test]
fn left_position_mirrors_stack_and_labels() {
    let config = TriggerConfig {
        position: Position::Left,
        ..TriggerConfig::default()
    };
    let (_, view) = open_view(config, 1);
    assert_eq!(view.primary.rect.x0, 30.0);
    let item = &view.items[0];
    assert_eq!(item.button.x0, 38.0);
    let label = item.label.as_ref().unwrap();
    assert!(label.rect.x0 > item.button.x1);
}

#[test]
fn labels_sit_toward_the_center() {
    let (_, view) = open_view(TriggerConfig::default(), 1);
    let item = &view.items[0];
    let label = item.label.as_ref().unwrap();
    assert_eq!(label.text, "Action");
    assert!(label.rect.x1 < item.button.x0);
    assert_eq!(label.rect.height(), 36.0);
    assert_eq!(label.corner_radius, 6.0);
    assert!(label.shadow.is_some());
}

#[test]
fn collapsed_items_start_at_the_primary_row() {
    let mut trigger = Trigger::default().with_item(ActionItem::new());
    trigger.activate();
    let view = trigger.view(CONTAINER, &NoGlyphs);
    let item = &view.items[0];
    assert_eq!(item.opacity, 0.0);
    assert_eq!(item.scale, 0.0);
    assert_eq!(item.button.y1, view.primary.rect.y1);
}

#[test]
fn hit_tests_agree_between_trigger_and_view() {
    let config = TriggerConfig {
        background_tappable: true,
        ..TriggerConfig::default()
    };
    let (mut trigger, view) = open_view(config, 3);
    let probes = [
        view.primary.rect.center(),
        view.items[0].bounds().center(),
        view.items[2].bounds().center(),
        view.items[1].label.as_ref().unwrap().rect.center() + view.items[1].translation,
        Point::new(5.0, 5.0),
    ];
    let expected = [
        HitTarget::Primary,
        HitTarget::Item(0),
        HitTarget::Item(2),
        HitTarget::Item(1),
        HitTarget::Backdrop,
    ];
    for (probe, target) in probes.into_iter().zip(expected) {
        assert_eq!(view.hit_test(probe), Some(target));
        assert_eq!(trigger.hit_test(CONTAINER, probe), Some(target));
    }

    assert_eq!(
        trigger.tap_at(CONTAINER, Point::new(5.0, 5.0)),
        Some(HitTarget::Backdrop)
    );
    assert!(!trigger.is_open());
}

#[test]
fn unknown_glyph_renders_empty() {
    let icons = GlyphRegistry::solid_icons();
    let mut trigger = Trigger::default()
        .icon("not-a-real-icon", overstory_fab::WHITE, 24.0)
        .with_item(ActionItem::new().glyph("not-a-real-icon"))
        .with_item(ActionItem::new().glyph("share"));
    trigger.activate();
    let view = trigger.view(CONTAINER, &icons);
    assert_eq!(view.primary.content, PrimaryContent::Empty);
    assert!(view.items[0].glyph.is_none());
    assert!(view.items[1].glyph.is_some());
}

#[test]
fn primary_icon_rotates_and_blends_when_open() {
    let config = TriggerConfig {
        out_range_color: Some(overstory_fab::WHITE),
        out_range_scale: 1.5,
        ..TriggerConfig::default()
    };
    let (_, view) = open_view(config, 1);
    assert_eq!(view.primary.rotation_degrees, 45.0);
    assert_eq!(view.primary.scale, 1.5);
    assert_eq!(view.primary.fill, overstory_fab::WHITE);
}
