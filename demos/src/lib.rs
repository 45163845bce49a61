// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the demos: logging setup, a simulated frame clock and
//! a text dump of view snapshots.
//!
//! Run:
//! - `cargo run -p understory_demos --example fab_basics`
//! - `cargo run -p understory_demos --example fab_from_json`
//!
//! Set `RUST_LOG=overstory_fab=trace` to see ignored input as well.

use core::fmt::Write as _;
use core::time::Duration;

use overstory_fab::{PrimaryContent, Trigger, TriggerView};
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber honoring `RUST_LOG`.
///
/// Defaults to phase transitions and glyph warnings.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("overstory_fab=debug,understory_glyph=warn")),
        )
        .with_target(false)
        .init();
}

/// A fixed-step clock standing in for a display's frame callbacks.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    frame: Duration,
    elapsed: Duration,
}

impl FrameClock {
    /// Frames every `frame`.
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            elapsed: Duration::ZERO,
        }
    }

    /// Simulated time so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advances `trigger` one frame.
    pub fn tick(&mut self, trigger: &mut Trigger) -> bool {
        self.elapsed += self.frame;
        trigger.advance(self.frame)
    }

    /// Runs frames until `trigger` is idle; returns how many ran.
    pub fn run_until_idle(&mut self, trigger: &mut Trigger) -> usize {
        let mut frames = 0;
        while trigger.needs_frame() {
            self.tick(trigger);
            frames += 1;
        }
        frames
    }
}

/// Renders a one-line-per-element summary of `view`.
pub fn describe(view: &TriggerView) -> String {
    let mut out = String::new();
    let primary = &view.primary;
    let content = match &primary.content {
        PrimaryContent::Glyph(glyph) => format!("glyph U+{:04X}", u32::from(glyph.glyph.codepoint)),
        PrimaryContent::Text { text, .. } => format!("text {text:?}"),
        PrimaryContent::Empty => "empty".to_owned(),
    };
    let _ = writeln!(
        out,
        "[{:?}] primary at ({:.0}, {:.0}) rotated {:.1}deg, {content}",
        view.phase, primary.rect.x0, primary.rect.y0, primary.rotation_degrees,
    );
    if let Some(backdrop) = &view.backdrop {
        let _ = writeln!(out, "  backdrop opacity {:.2}", backdrop.opacity);
    }
    for item in &view.items {
        let bounds = item.bounds();
        let label = item.label.as_ref().map_or("", |label| label.text.as_str());
        let _ = writeln!(
            out,
            "  item {} {label:?} at ({:.0}, {:.0}) opacity {:.2}{}",
            item.index,
            bounds.x0,
            bounds.y0,
            item.opacity,
            if item.glyph.is_some() { "" } else { " (no glyph)" },
        );
    }
    out
}
