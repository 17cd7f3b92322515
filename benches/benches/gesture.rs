// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use vantage_event_state::input::{DragMove, GestureEvent, WheelInput};
use vantage_gesture::{Interaction, ZoomConfig, ZoomController};
use vantage_view2d::{AffineTransform, TransformViewport};

fn bench_zoom_about(c: &mut Criterion) {
    let zoom = ZoomController::new(ZoomConfig::default());
    let start = AffineTransform::translate(-40.0, 25.0).compose(AffineTransform::scale(1.5));

    c.bench_function("gesture/zoom_about", |b| {
        b.iter(|| {
            black_box(zoom.zoom_about(
                black_box(start),
                black_box(Point::new(120.0, 80.0)),
                black_box(-120.0),
            ))
        });
    });
}

fn bench_pan_stream(c: &mut Criterion) {
    let events: Vec<GestureEvent> = std::iter::once(GestureEvent::DragStart { button: None })
        .chain((0..1_000).map(|i| {
            let d = f64::from(i) * 0.5;
            GestureEvent::DragMove(DragMove::new(d, -d))
        }))
        .chain(std::iter::once(GestureEvent::DragEnd))
        .chain((0..100).map(|i| {
            GestureEvent::Wheel(WheelInput::ctrl(
                if i % 2 == 0 { -40.0 } else { 40.0 },
                200.0,
                150.0,
            ))
        }))
        .collect();

    c.bench_function("gesture/interaction_stream", |b| {
        b.iter_batched(
            || Interaction::new(TransformViewport::new(), ZoomConfig::default()),
            |mut ix| {
                for event in &events {
                    ix.handle(*event);
                }
                black_box(ix.into_viewport())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_zoom_about, bench_pan_stream);
criterion_main!(benches);
