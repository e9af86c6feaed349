// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Redline View: coordinate spaces and transforms for drawing comparison.
//!
//! A drawing revision is rendered as a layer inside a viewer container and
//! can be panned and zoomed. Annotations, alignment points and detected
//! changes are stored in a space that does not depend on the view. This
//! crate maps between three spaces:
//!
//! - **Screen space** ([`ScreenPoint`]): pixels relative to the container.
//! - **Normalized drawing space** ([`NormalizedPoint`]): `[0, 1] × [0, 1]`
//!   over the full page, independent of pan and zoom.
//! - **Drawing-unit space** ([`DrawingUnitPoint`]): the page's native units.
//!
//! The conversion functions are pure. Every call takes the
//! [`ViewportState`], [`LayerDimensions`] and [`ContainerRect`] it needs as
//! plain values, so two viewers in the same process never interfere.
//!
//! It does **not** own rendering, image diffing or persistence. Callers are
//! expected to:
//! - Measure the container and build a [`PointerPosition`] from their UI events.
//! - Keep a [`DrawingViewer`] (or their own gesture code) for pan/zoom.
//! - Store the normalized points they get back.
//!
//! ## Placing an annotation
//!
//! ```rust
//! use kurbo::Vec2;
//! use redline_view::{
//!     ContainerRect, LayerDimensions, NormalizedPoint, PointerPosition, ViewportState,
//!     drawing_to_screen_point, event_to_drawing_point, is_point_in_bounds,
//! };
//!
//! // Container sits at (50, 30) on the page; the drawing is zoomed 2x and panned.
//! let container = ContainerRect::new(50.0, 30.0, 800.0, 600.0);
//! let viewport = ViewportState::new(Vec2::new(100.0, 50.0), 2.0);
//! let layer = LayerDimensions::new(800.0, 400.0);
//!
//! let click = PointerPosition::new(50.0 + 500.0, 30.0 + 450.0);
//! let pt = event_to_drawing_point(click, container, viewport, layer);
//! assert_eq!(pt, NormalizedPoint::new(0.25, 0.5));
//! assert!(is_point_in_bounds(pt));
//!
//! // Later, draw a marker for that point with whatever the viewport is then.
//! let screen = drawing_to_screen_point(pt, viewport, layer);
//! assert_eq!((screen.x(), screen.y()), (500.0, 450.0));
//! ```
//!
//! ## Degenerate input
//!
//! Nothing here returns an error. A zero-extent page axis normalizes to `0`;
//! clicks outside the page clamp onto its edge. A non-positive
//! [`ViewportState::scale`] is a caller bug and trips a `debug_assert!`.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for points, viewport state and
//!   layer dimensions.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
pub mod magnifier;
mod modes;
mod overlay;
mod points;
mod transform;
mod viewer;
mod viewport;

pub use bounds::is_point_in_bounds;
pub use modes::{ClampMode, FitMode};
pub use overlay::{ProjectedMarker, project_marker, project_markers};
pub use points::{DrawingUnitPoint, NormalizedPoint, ScreenPoint};
pub use transform::{
    container_relative_point, drawing_to_screen_point, drawing_units_to_screen,
    event_to_drawing_point, screen_to_drawing_point, screen_to_drawing_units,
};
pub use viewer::{DrawingViewer, DrawingViewerDebugInfo};
pub use viewport::{ContainerRect, LayerDimensions, PointerPosition, ViewportState};
