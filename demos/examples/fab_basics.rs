// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expandable trigger basics.
//!
//! Build a trigger with three items, open it, pick an item and watch the
//! stack settle, all on a simulated 60 Hz clock.
//!
//! Run:
//! - `cargo run -p understory_demos --example fab_basics`

use core::time::Duration;
use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use overstory_fab::{ActionItem, Trigger, TriggerConfig};
use understory_demos::{FrameClock, describe, init_tracing};
use understory_glyph::GlyphRegistry;
use understory_motion::{Curve, Easing, Timing};

fn main() {
    init_tracing();

    let container = Size::new(390.0, 844.0);
    let icons = GlyphRegistry::solid_icons();
    let picked = Rc::new(RefCell::new(Vec::new()));

    let mut trigger = Trigger::new(TriggerConfig {
        spacing: 8.0,
        background_tappable: true,
        out_range_scale: 0.8,
        dim_curve: Curve::Timing(Timing::new(Duration::from_millis(150), Easing::EaseOut)),
        ..TriggerConfig::default()
    })
    .icon("plus", overstory_fab::WHITE, 24.0);
    for (title, glyph) in [("Share", "share"), ("Edit", "edit"), ("Delete", "trash")] {
        let log = Rc::clone(&picked);
        trigger = trigger.with_item(
            ActionItem::new()
                .title(title)
                .glyph(glyph)
                .on_press(move || log.borrow_mut().push(title)),
        );
    }

    let mut clock = FrameClock::new(Duration::from_micros(16_667));

    println!("{}", describe(&trigger.view(container, &icons)));

    let primary = trigger.layout(container).primary().center();
    trigger.tap_at(container, primary);
    for _ in 0..6 {
        clock.tick(&mut trigger);
    }
    println!("mid-reveal:\n{}", describe(&trigger.view(container, &icons)));

    let frames = clock.run_until_idle(&mut trigger);
    println!(
        "open after {frames} more frames ({:?}):\n{}",
        clock.elapsed(),
        describe(&trigger.view(container, &icons))
    );

    // Tap the second item where it is drawn.
    let view = trigger.view(container, &icons);
    let target = view.items[1].bounds().center();
    println!("tap at {target:?} -> {:?}", trigger.tap_at(container, target));
    println!("closing:\n{}", describe(&trigger.view(container, &icons)));

    clock.run_until_idle(&mut trigger);
    println!("settled:\n{}", describe(&trigger.view(container, &icons)));

    // A tap on empty space does nothing while closed.
    println!(
        "tap on empty space -> {:?}",
        trigger.tap_at(container, Point::new(20.0, 20.0))
    );
    println!("picked: {:?}", picked.borrow());
}
