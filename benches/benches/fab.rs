// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use std::time::Duration;
use understory_fab::placement::{directional_rect, idle_rect};
use understory_fab::{Direction, FabConfig, FloatingButton, IdlePosition};

const CONTAINER: Rect = Rect::new(0.0, 0.0, 1080.0, 1920.0);

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("fab/placement");
    let configs: Vec<FabConfig> = IdlePosition::ALL
        .iter()
        .map(|&idle_position| FabConfig {
            idle_position,
            ..FabConfig::default()
        })
        .collect();
    group.throughput(Throughput::Elements((configs.len() * Direction::ALL.len()) as u64));

    group.bench_function("idle_and_directional", |b| {
        b.iter(|| {
            for config in &configs {
                let idle = idle_rect(black_box(CONTAINER), config);
                for direction in Direction::ALL {
                    black_box(directional_rect(CONTAINER, config, idle, direction));
                }
            }
        });
    });

    group.finish();
}

fn bench_scroll_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("fab/scroll");

    // A long fling with periodic reversals, stepping motions at 60 Hz.
    let samples: Vec<f64> = (0..4_096)
        .map(|n| {
            let phase = (n / 256) % 2;
            let local = f64::from(n % 256);
            if phase == 0 { local * 4.0 } else { 1_024.0 - local * 4.0 }
        })
        .collect();
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("observe_and_advance", |b| {
        b.iter_batched(
            || FloatingButton::new(CONTAINER, FabConfig::default()),
            |mut fab| {
                for &offset in &samples {
                    fab.on_scroll(offset);
                    fab.advance(Duration::from_micros(16_667));
                }
                black_box(fab.visual());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_placement, bench_scroll_stream);
criterion_main!(benches);
