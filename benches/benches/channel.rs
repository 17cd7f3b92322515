// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vantage_channel::{EventChannel, SubscribeOptions};

fn bench_publish_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel/publish");

    for subscribers in [1usize, 8, 64, 512] {
        let hits = Rc::new(Cell::new(0_u64));
        let mut channel = EventChannel::<u64>::new();
        for i in 0..subscribers {
            let hits = hits.clone();
            // Spread priorities so delivery order is not trivially insertion order.
            let priority = i32::try_from(i % 7).unwrap_or_default();
            channel.subscribe_fn(
                "bench",
                move |n: &u64| hits.set(hits.get().wrapping_add(*n)),
                SubscribeOptions::new().priority(priority),
            );
        }
        group.throughput(Throughput::Elements(subscribers as u64));

        group.bench_with_input(
            BenchmarkId::new("fanout", subscribers),
            &subscribers,
            |b, _| {
                b.iter(|| black_box(channel.publish("bench", black_box(&1))));
            },
        );
    }

    group.finish();
}

fn bench_subscribe_sorted_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel/subscribe");

    for len in [64usize, 1_024] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("priority_insert", len), &len, |b, &len| {
            b.iter(|| {
                let mut channel = EventChannel::<()>::new();
                for i in 0..len {
                    let priority = i32::try_from(i % 13).unwrap_or_default();
                    channel.subscribe_fn("x", |_: &()| {}, SubscribeOptions::new().priority(priority));
                }
                black_box(channel.subscriber_count("x"))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_publish_fanout, bench_subscribe_sorted_insert);
criterion_main!(benches);
