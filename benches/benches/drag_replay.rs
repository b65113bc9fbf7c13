// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tactile_gesture::{Modality, PointerSample, TrackRect};
use tactile_refresher::{Refresher, RefresherConfig};
use tactile_slider::{Slider, SliderDomain};

/// A synthetic pull: monotonically increasing deltas past the threshold.
fn pull_samples(len: usize) -> Vec<PointerSample> {
    (0..len)
        .map(|i| {
            let delta = 140.0 * (i as f64 + 1.0) / len as f64;
            PointerSample::new(0.0, delta, delta, 1)
        })
        .collect()
}

fn bench_refresher_move_handler(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresher/drag_replay");
    let samples = pull_samples(512);
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("move_samples", |b| {
        b.iter_batched(
            || {
                let mut config = RefresherConfig::default();
                config.set_enabled(true);
                let mut r = Refresher::new(config);
                r.on_drag_start();
                r
            },
            |mut r| {
                for sample in &samples {
                    black_box(r.on_drag_move(sample, 0.0));
                }
                black_box(r);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_slider_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/drag_replay");
    let track = TrackRect::new(0.0, 1_000.0, 0.0);
    let moves: Vec<PointerSample> = (0..512)
        .map(|i| PointerSample::new(f64::from(i) * 2.0, 5.0, 0.0, 1))
        .collect();
    group.throughput(Throughput::Elements(moves.len() as u64));

    for snaps in [false, true] {
        let name = if snaps { "snapping" } else { "free" };
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut slider = Slider::new(SliderDomain::new(0.0, 1_000.0, 10.0));
                    slider.set_snaps(snaps);
                    let _ = slider.on_pointer_down(
                        &PointerSample::new(0.0, 5.0, 0.0, 1),
                        track,
                        Modality::Pointer,
                    );
                    slider
                },
                |mut slider| {
                    for sample in &moves {
                        black_box(slider.on_pointer_move(sample));
                    }
                    black_box(slider);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_refresher_move_handler, bench_slider_drag);
criterion_main!(benches);
