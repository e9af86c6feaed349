// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use redline_view::{
    ContainerRect, DrawingViewer, LayerDimensions, NormalizedPoint, PointerPosition, ScreenPoint,
    ViewportState, drawing_to_screen_point, event_to_drawing_point, project_markers,
};

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

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn pointers(n: usize, seed: u64) -> Vec<PointerPosition> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| PointerPosition::new(rng.range(-200.0, 1_200.0), rng.range(-200.0, 900.0)))
        .collect()
}

fn normalized(n: usize, seed: u64) -> Vec<NormalizedPoint> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| NormalizedPoint::new(rng.range(-0.1, 1.1), rng.range(-0.1, 1.1)))
        .collect()
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("redline_view");
    group.sample_size(50);

    let container = ContainerRect::new(40.0, 80.0, 1_000.0, 700.0);
    let viewport = ViewportState::new(Vec2::new(-350.0, -120.0), 2.5);
    let layer = LayerDimensions::new(2_480.0, 3_508.0);

    for n in [1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n as u64));

        let events = pointers(n, 0xC0FFEE);
        group.bench_function(format!("event_to_drawing_point(n={n})"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &e in &events {
                    let p = event_to_drawing_point(black_box(e), container, viewport, layer);
                    acc += p.x() + p.y();
                }
                black_box(acc)
            });
        });

        let points = normalized(n, 0xBADA55);
        group.bench_function(format!("drawing_to_screen_point(n={n})"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &p in &points {
                    let s = drawing_to_screen_point(black_box(p), viewport, layer);
                    acc += s.x() + s.y();
                }
                black_box(acc)
            });
        });

        group.bench_function(format!("project_markers(n={n})"), |b| {
            b.iter(|| {
                let visible = project_markers(
                    points.iter().copied(),
                    viewport,
                    layer,
                    Size::new(1_000.0, 700.0),
                )
                .filter(|m| m.is_visible())
                .count();
                black_box(visible)
            });
        });
    }

    group.bench_function("viewer_zoom_about", |b| {
        let mut viewer = DrawingViewer::new(Size::new(1_000.0, 700.0), layer);
        viewer.fit_layer();
        let mut rng = Lcg::new(7);
        b.iter(|| {
            let anchor = ScreenPoint::new(rng.range(0.0, 1_000.0), rng.range(0.0, 700.0));
            let factor = if rng.next_f64() < 0.5 { 1.1 } else { 1.0 / 1.1 };
            viewer.zoom_about(anchor, black_box(factor));
            black_box(viewer.scale())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
