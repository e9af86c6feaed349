// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen ↔ drawing coordinate conversion.
//!
//! All functions here are pure: every piece of state arrives as an argument,
//! nothing is retained between calls, and nothing panics in release builds.
//! Degenerate inputs resolve to defined values (`0` on a zero-extent axis,
//! clamped boundaries for out-of-page clicks).

use crate::points::{DrawingUnitPoint, NormalizedPoint, ScreenPoint};
use crate::viewport::{ContainerRect, LayerDimensions, PointerPosition, ViewportState};

/// Removes pan and zoom from a container-relative screen point.
#[must_use]
pub fn screen_to_drawing_units(screen: ScreenPoint, viewport: ViewportState) -> DrawingUnitPoint {
    debug_assert!(
        viewport.scale > 0.0,
        "viewport scale must be positive, got {}",
        viewport.scale
    );
    DrawingUnitPoint::new(
        (screen.x() - viewport.translate_x) / viewport.scale,
        (screen.y() - viewport.translate_y) / viewport.scale,
    )
}

/// Applies zoom and pan to a point in drawing units.
#[must_use]
pub fn drawing_units_to_screen(units: DrawingUnitPoint, viewport: ViewportState) -> ScreenPoint {
    ScreenPoint::new(
        units.x() * viewport.scale + viewport.translate_x,
        units.y() * viewport.scale + viewport.translate_y,
    )
}

/// Converts a container-relative screen point into normalized drawing space.
///
/// The result is always inside `[0, 1] × [0, 1]`: clicks beyond the page
/// edge are clamped onto it rather than rejected. An axis whose layer extent
/// is zero maps to exactly `0`.
///
/// `container` is accepted for container-offset correction but is not read:
/// `screen` must already be container-relative (see
/// [`container_relative_point`]).
#[must_use]
pub fn screen_to_drawing_point(
    screen: ScreenPoint,
    viewport: ViewportState,
    container: ContainerRect,
    layer: LayerDimensions,
) -> NormalizedPoint {
    // Unused: `screen` is already container-relative.
    let _ = container;
    let units = screen_to_drawing_units(screen, viewport);
    layer.normalize(units).clamped()
}

/// Converts a normalized drawing point back to container-relative screen pixels.
///
/// This is the exact inverse of [`screen_to_drawing_point`] whenever the
/// forward direction did not clamp. The output is not clamped: markers that
/// have been panned away land outside the container.
#[must_use]
pub fn drawing_to_screen_point(
    drawing: NormalizedPoint,
    viewport: ViewportState,
    layer: LayerDimensions,
) -> ScreenPoint {
    drawing_units_to_screen(layer.denormalize(drawing), viewport)
}

/// Subtracts the container's top-left corner from an absolute pointer position.
#[must_use]
pub fn container_relative_point(event: PointerPosition, container: ContainerRect) -> ScreenPoint {
    ScreenPoint::new(event.x - container.left, event.y - container.top)
}

/// Maps a pointer event straight to a normalized drawing point.
///
/// This is the entry point for placing or selecting annotations on a
/// rendered drawing.
///
/// ```
/// use redline_view::{
///     ContainerRect, LayerDimensions, NormalizedPoint, PointerPosition, ViewportState,
///     event_to_drawing_point,
/// };
///
/// let container = ContainerRect::new(0.0, 0.0, 1000.0, 500.0);
/// let layer = LayerDimensions::new(1000.0, 500.0);
/// let pt = event_to_drawing_point(
///     PointerPosition::new(500.0, 250.0),
///     container,
///     ViewportState::IDENTITY,
///     layer,
/// );
/// assert_eq!(pt, NormalizedPoint::CENTER);
/// ```
#[must_use]
pub fn event_to_drawing_point(
    event: PointerPosition,
    container: ContainerRect,
    viewport: ViewportState,
    layer: LayerDimensions,
) -> NormalizedPoint {
    let screen = container_relative_point(event, container);
    screen_to_drawing_point(screen, viewport, container, layer)
}
