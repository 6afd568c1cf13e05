// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_animation_queue::{Admission, AnimationQueue};

fn bench_enqueue_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation_queue/enqueue_drain");

    // Every request is admitted; measures FIFO bookkeeping per task.
    for len in [2usize, 16, 256] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let mut queue = AnimationQueue::with_capacity(len);
                let mut started = None;
                for n in 0..len {
                    if let Admission::Started(id) = queue.enqueue(n) {
                        started = Some(id);
                    }
                }
                while let Some(id) = started {
                    started = queue.notify_finished(id).and_then(|done| done.started);
                }
                black_box(queue);
            });
        });
    }

    group.finish();
}

fn bench_burst_drops(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation_queue/burst");

    // A stalled queue under a burst of requests: everything past capacity is dropped.
    for burst in [64usize, 1_024] {
        group.throughput(Throughput::Elements(burst as u64));
        group.bench_with_input(BenchmarkId::from_parameter(burst), &burst, |b, &burst| {
            b.iter(|| {
                let mut queue = AnimationQueue::new();
                let dropped = (0..burst).filter(|&n| queue.enqueue(n).is_dropped()).count();
                black_box(dropped);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enqueue_and_drain, bench_burst_drops);
criterion_main!(benches);
