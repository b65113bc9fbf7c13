// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tactile_slider::SliderDomain;

fn bench_ratio_to_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/ratio_to_value");

    for step in [1i64, 5, 100] {
        let domain = SliderDomain::new(0.0, 10_000.0, step as f64);
        let ratios: Vec<f64> = (0..1_024).map(|i| f64::from(i) / 1_023.0).collect();
        group.throughput(Throughput::Elements(ratios.len() as u64));

        group.bench_with_input(BenchmarkId::new("step", step), &ratios, |b, ratios| {
            b.iter(|| {
                let mut acc = 0i64;
                for &r in ratios {
                    acc = acc.wrapping_add(domain.ratio_to_value(black_box(r)));
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let domain = SliderDomain::new(0.0, 10_000.0, 25.0);
    c.bench_function("slider/value_ratio_round_trip", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for i in 0..1_024 {
                let r = f64::from(i) / 1_023.0;
                acc += domain.value_to_ratio(domain.ratio_to_value(black_box(r)) as f64);
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_ratio_to_value, bench_round_trip);
criterion_main!(benches);
