// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end checks for the public coordinate transform API.
//!
//! The concrete scenarios mirror typical viewer interactions; the sampled
//! tests exercise the clamping, degenerate-axis and round-trip laws over a
//! deterministic spread of viewports and pages.

use kurbo::Vec2;
use redline_view::{
    ContainerRect, LayerDimensions, NormalizedPoint, PointerPosition, ScreenPoint, ViewportState,
    container_relative_point, drawing_to_screen_point, event_to_drawing_point, is_point_in_bounds,
    screen_to_drawing_point,
};

const TOLERANCE: f64 = 1e-9;

/// Small deterministic generator so the sampled tests are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_unit()
    }

    fn viewport(&mut self) -> ViewportState {
        ViewportState::new(
            Vec2::new(self.range(-2_000.0, 2_000.0), self.range(-2_000.0, 2_000.0)),
            self.range(0.05, 20.0),
        )
    }

    fn layer(&mut self) -> LayerDimensions {
        LayerDimensions::new(self.range(1.0, 5_000.0), self.range(1.0, 5_000.0))
    }
}

#[test]
fn center_of_unscaled_drawing_is_half() {
    let pt = screen_to_drawing_point(
        ScreenPoint::new(500.0, 250.0),
        ViewportState::IDENTITY,
        ContainerRect::default(),
        LayerDimensions::new(1000.0, 500.0),
    );
    assert_eq!(pt, NormalizedPoint::new(0.5, 0.5));
}

#[test]
fn click_above_left_of_page_clamps_to_origin() {
    let pt = screen_to_drawing_point(
        ScreenPoint::new(-100.0, -50.0),
        ViewportState::IDENTITY,
        ContainerRect::default(),
        LayerDimensions::new(1000.0, 500.0),
    );
    assert_eq!(pt, NormalizedPoint::new(0.0, 0.0));
}

#[test]
fn zoomed_and_panned_point_projects_to_screen() {
    let screen = drawing_to_screen_point(
        NormalizedPoint::new(0.25, 0.5),
        ViewportState::new(Vec2::new(100.0, 50.0), 2.0),
        LayerDimensions::new(800.0, 400.0),
    );
    assert_eq!(screen, ScreenPoint::new(500.0, 450.0));
}

#[test]
fn pointer_is_made_container_relative() {
    let pt = container_relative_point(
        PointerPosition::new(150.0, 80.0),
        ContainerRect::new(50.0, 30.0, 400.0, 300.0),
    );
    assert_eq!(pt, ScreenPoint::new(100.0, 50.0));
}

#[test]
fn click_at_center_maps_end_to_end() {
    let container = ContainerRect::new(0.0, 0.0, 1000.0, 500.0);
    let pt = event_to_drawing_point(
        PointerPosition::new(500.0, 250.0),
        container,
        ViewportState::IDENTITY,
        LayerDimensions::new(1000.0, 500.0),
    );
    assert_eq!(pt, NormalizedPoint::new(0.5, 0.5));
    assert!(is_point_in_bounds(pt));
}

#[test]
fn forward_transform_output_is_always_on_page() {
    let mut rng = Lcg(7);
    for _ in 0..500 {
        let vp = rng.viewport();
        let layer = rng.layer();
        let screen = ScreenPoint::new(rng.range(-1e5, 1e5), rng.range(-1e5, 1e5));
        let pt = screen_to_drawing_point(screen, vp, ContainerRect::default(), layer);
        assert!(
            is_point_in_bounds(pt),
            "{pt:?} escaped the page for {screen:?} under {vp:?} / {layer:?}"
        );
    }
}

#[test]
fn degenerate_axes_normalize_to_zero() {
    let mut rng = Lcg(11);
    for _ in 0..200 {
        let vp = rng.viewport();
        let screen = ScreenPoint::new(rng.range(-1e4, 1e4), rng.range(-1e4, 1e4));

        let flat = LayerDimensions::new(0.0, rng.range(1.0, 1_000.0));
        let pt = screen_to_drawing_point(screen, vp, ContainerRect::default(), flat);
        assert_eq!(pt.x(), 0.0);

        let thin = LayerDimensions::new(rng.range(1.0, 1_000.0), 0.0);
        let pt = screen_to_drawing_point(screen, vp, ContainerRect::default(), thin);
        assert_eq!(pt.y(), 0.0);
    }
}

#[test]
fn drawing_to_screen_round_trips_inside_page() {
    let mut rng = Lcg(42);
    for _ in 0..500 {
        let vp = rng.viewport();
        let layer = rng.layer();
        let p = NormalizedPoint::new(rng.range(0.001, 0.999), rng.range(0.001, 0.999));

        let screen = drawing_to_screen_point(p, vp, layer);
        let back = screen_to_drawing_point(screen, vp, ContainerRect::default(), layer);

        assert!(
            (back.x() - p.x()).abs() < TOLERANCE && (back.y() - p.y()).abs() < TOLERANCE,
            "{p:?} came back as {back:?} under {vp:?} / {layer:?}"
        );
    }
}

#[test]
fn independent_viewers_do_not_interact() {
    let layer = LayerDimensions::new(1000.0, 500.0);
    let left = ViewportState::new(Vec2::new(0.0, 0.0), 1.0);
    let right = ViewportState::new(Vec2::new(-500.0, -250.0), 2.0);
    let screen = ScreenPoint::new(500.0, 250.0);

    let a = screen_to_drawing_point(screen, left, ContainerRect::default(), layer);
    let b = screen_to_drawing_point(screen, right, ContainerRect::default(), layer);
    let a_again = screen_to_drawing_point(screen, left, ContainerRect::default(), layer);

    assert_eq!(a, NormalizedPoint::new(0.5, 0.5));
    assert_eq!(b, NormalizedPoint::new(0.5, 0.5));
    assert_eq!(a, a_again);
}
