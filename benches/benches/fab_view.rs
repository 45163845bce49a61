// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use overstory_fab::{ActionItem, Trigger, TriggerConfig};
use std::time::Duration;
use understory_glyph::{GlyphRegistry, NoGlyphs};

const CONTAINER: Size = Size::new(390.0, 844.0);
const FRAME: Duration = Duration::from_millis(16);

const GLYPHS: [&str; 4] = ["share", "edit", "trash", "not-a-real-icon"];

fn trigger_with(n: usize) -> Trigger {
    (0..n).fold(Trigger::new(TriggerConfig::default()), |trigger, i| {
        trigger.with_item(
            ActionItem::new()
                .title(format!("Action {i}"))
                .glyph(GLYPHS[i % GLYPHS.len()]),
        )
    })
}

fn opened(n: usize) -> Trigger {
    let mut trigger = trigger_with(n);
    trigger.activate();
    for _ in 0..30 {
        trigger.advance(FRAME);
    }
    trigger
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("fab/view");
    let icons = GlyphRegistry::solid_icons();

    for n in [1_usize, 4, 16] {
        group.throughput(Throughput::Elements(n as u64));
        let trigger = opened(n);

        group.bench_with_input(BenchmarkId::new("solid_icons", n), &trigger, |b, trigger| {
            b.iter(|| black_box(trigger.view(CONTAINER, &icons)));
        });
        group.bench_with_input(BenchmarkId::new("no_glyphs", n), &trigger, |b, trigger| {
            b.iter(|| black_box(trigger.view(CONTAINER, &NoGlyphs)));
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("fab/hit_test");

    // A grid of probes over the whole container; most land on the backdrop.
    let probes: Vec<Point> = (0..20)
        .flat_map(|x| (0..40).map(move |y| Point::new(f64::from(x) * 19.5, f64::from(y) * 21.1)))
        .collect();

    for n in [1_usize, 4, 16] {
        group.throughput(Throughput::Elements(probes.len() as u64));
        let trigger = opened(n);
        group.bench_with_input(BenchmarkId::new("trigger", n), &trigger, |b, trigger| {
            b.iter(|| {
                for probe in &probes {
                    black_box(trigger.hit_test(CONTAINER, *probe));
                }
            });
        });
        let view = trigger.view(CONTAINER, &NoGlyphs);
        group.bench_with_input(BenchmarkId::new("view", n), &view, |b, view| {
            b.iter(|| {
                for probe in &probes {
                    black_box(view.hit_test(*probe));
                }
            });
        });
    }

    group.finish();
}

fn bench_open_close_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("fab/cycle");

    for n in [1_usize, 8] {
        group.bench_with_input(BenchmarkId::new("press_settle", n), &n, |b, &n| {
            b.iter_batched(
                || trigger_with(n),
                |mut trigger| {
                    for _ in 0..2 {
                        trigger.press();
                        while trigger.needs_frame() {
                            trigger.advance(FRAME);
                        }
                    }
                    black_box(trigger.phase());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_view, bench_hit_test, bench_open_close_cycle);
criterion_main!(benches);
