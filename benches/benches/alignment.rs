// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use redline_align::{AlignmentPoints, AlignmentTransform, AutoAlignConfig, auto_align};
use redline_view::NormalizedPoint;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn point(&mut self) -> NormalizedPoint {
        NormalizedPoint::new(self.next_f64(), self.next_f64())
    }
}

fn point_sets(n: usize, seed: u64) -> Vec<AlignmentPoints> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| AlignmentPoints {
            base_a: rng.point(),
            base_b: rng.point(),
            candidate_a: rng.point(),
            candidate_b: rng.point(),
        })
        .collect()
}

fn bench_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("redline_align");
    group.sample_size(50);

    for n in [1_000usize, 10_000] {
        group.throughput(Throughput::Elements(n as u64));

        let sets = point_sets(n, 0x5EED);
        group.bench_function(format!("from_points(n={n})"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &pts in &sets {
                    acc += AlignmentTransform::from_points(black_box(pts)).scale;
                }
                black_box(acc)
            });
        });

        let transform = AlignmentTransform::from_points(sets[0]);
        let mut rng = Lcg::new(0xF00D);
        let points: Vec<_> = (0..n).map(|_| rng.point()).collect();
        group.bench_function(format!("apply(n={n})"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &p in &points {
                    let q = transform.apply(black_box(p));
                    acc += q.x() + q.y();
                }
                black_box(acc)
            });
        });
    }

    group.bench_function("auto_align", |b| {
        let base = Size::new(2_480.0, 3_508.0);
        let candidate = Size::new(4_960.0, 7_016.0);
        b.iter(|| {
            black_box(auto_align(
                black_box(base),
                black_box(candidate),
                AutoAlignConfig::default(),
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_alignment);
criterion_main!(benches);
