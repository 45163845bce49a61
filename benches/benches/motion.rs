// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use understory_motion::{Channel, Curve, Easing, Spring, Timing};

const FRAME: Duration = Duration::from_micros(16_667);

fn bench_channel_to_rest(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion/channel_to_rest");

    let curves = [
        ("spring_default", Curve::Spring(Spring::default())),
        (
            "spring_overdamped",
            Curve::Spring(Spring {
                damping: 60.0,
                ..Spring::default()
            }),
        ),
        (
            "spring_unclamped",
            Curve::Spring(Spring {
                overshoot_clamping: false,
                ..Spring::default()
            }),
        ),
        ("timing_200ms", Curve::Timing(Timing::default())),
    ];

    // Full open animation driven at 60 Hz until the channel settles.
    for (name, curve) in curves {
        group.bench_with_input(BenchmarkId::new("open", name), &curve, |b, curve| {
            b.iter(|| {
                let mut channel = Channel::new(0.0);
                channel.set_target(1.0, *curve);
                let mut frames = 0_u32;
                while !channel.is_settled() && frames < 10_000 {
                    channel.step(FRAME);
                    frames += 1;
                }
                black_box((channel.value(), frames));
            });
        });
    }

    group.finish();
}

fn bench_retarget_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion/retarget");

    // Toggle the target every few frames, as a user hammering a button would.
    for every in [1_usize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("spring", every), &every, |b, &every| {
            b.iter(|| {
                let mut channel = Channel::new(0.0);
                for frame in 0..600 {
                    if frame % every == 0 {
                        let target = if channel.target() == 0.0 { 1.0 } else { 0.0 };
                        channel.set_target(target, Curve::default());
                    }
                    channel.step(FRAME);
                }
                black_box(channel.value());
            });
        });
        group.bench_with_input(BenchmarkId::new("timing", every), &every, |b, &every| {
            let curve = Curve::Timing(Timing::new(Duration::from_millis(200), Easing::EaseInOut));
            b.iter(|| {
                let mut channel = Channel::new(0.0);
                for frame in 0..600 {
                    if frame % every == 0 {
                        let target = if channel.target() == 0.0 { 1.0 } else { 0.0 };
                        channel.set_target(target, curve);
                    }
                    channel.step(FRAME);
                }
                black_box(channel.value());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_channel_to_rest, bench_retarget_storm);
criterion_main!(benches);
