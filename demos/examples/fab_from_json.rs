// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options-driven FAB loaded from JSON.
//!
//! Reads `data/fab.json` (or the path given as the first argument), builds a
//! `Fab`, opens it and selects every option in turn. One option names a
//! glyph that does not exist; it is logged and rendered without an icon.
//!
//! Run:
//! - `cargo run -p understory_demos --example fab_from_json`
//! - `cargo run -p understory_demos --example fab_from_json -- path/to/fab.json`

use core::time::Duration;
use std::error::Error;
use std::path::PathBuf;

use kurbo::Size;
use overstory_fab::{Fab, FabSettings};
use understory_demos::{FrameClock, describe, init_tracing};
use understory_glyph::GlyphRegistry;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let path = std::env::args_os().nth(1).map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/fab.json"),
        PathBuf::from,
    );
    let settings: FabSettings = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let option_count = settings.options.len();

    let mut trigger = Fab::try_from(settings)?
        .on_option_press(|screen, option| {
            tracing::info!(title = %option.title, ?screen, extra = ?option.data, "navigate");
        })
        .build();

    let container = Size::new(390.0, 844.0);
    let icons = GlyphRegistry::solid_icons();
    let mut clock = FrameClock::new(Duration::from_millis(16));

    for index in 0..option_count {
        trigger.press();
        clock.run_until_idle(&mut trigger);
        if index == 0 {
            println!("{}", describe(&trigger.view(container, &icons)));
        }
        trigger.press_item(index);
        clock.run_until_idle(&mut trigger);
    }
    println!(
        "done after {:?} of simulated time:\n{}",
        clock.elapsed(),
        describe(&trigger.view(container, &icons))
    );
    Ok(())
}
