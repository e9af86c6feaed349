// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry for a magnifying lens used during precise point placement.
//!
//! The lens shows a zoomed preview of the raster under the pointer. This
//! module computes which source pixels to sample and where to place the
//! lens inside the container; drawing the pixels is left to the host.

use kurbo::{Point, Rect, Size};

use crate::points::ScreenPoint;
use crate::viewport::{ContainerRect, PointerPosition};

/// Lens configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagnifierConfig {
    /// Zoom factor of the lens (`3.0` shows a third of `size` source pixels).
    pub magnification: f64,
    /// Side length of the square lens in screen pixels.
    pub size: f64,
    /// Gap between the pointer and the lens in screen pixels.
    pub offset: f64,
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        Self {
            magnification: 3.0,
            size: 120.0,
            offset: 20.0,
        }
    }
}

/// Source-pixel rectangle to draw into the lens.
///
/// `element` is the on-screen rectangle of the displayed raster and `source`
/// its intrinsic pixel size. Returns `None` when the pointer is outside the
/// element (edges count as inside) or the element has no area.
///
/// The sample is centred on the pointer, scaled per axis from display to
/// source pixels, pinned to the source origin, and clipped to the source
/// extent.
#[must_use]
pub fn sample_rect(
    pointer: PointerPosition,
    element: ContainerRect,
    source: Size,
    config: MagnifierConfig,
) -> Option<Rect> {
    if element.width <= 0.0 || element.height <= 0.0 || config.magnification <= 0.0 {
        return None;
    }
    let rel_x = pointer.x - element.left;
    let rel_y = pointer.y - element.top;
    if !(0.0..=element.width).contains(&rel_x) || !(0.0..=element.height).contains(&rel_y) {
        return None;
    }

    let scale_x = source.width / element.width;
    let scale_y = source.height / element.height;
    let sample = config.size / config.magnification;
    let half = sample / 2.0;

    let x0 = (rel_x * scale_x - half * scale_x).max(0.0);
    let y0 = (rel_y * scale_y - half * scale_y).max(0.0);
    let w = (sample * scale_x).min(source.width - x0);
    let h = (sample * scale_y).min(source.height - y0);
    Some(Rect::new(x0, y0, x0 + w, y0 + h))
}

/// Top-left corner of the lens inside the container.
///
/// The lens sits `offset` below and to the right of the pointer, flips to
/// the other side of an axis where it would overflow the container, and
/// falls back to `offset` if the flip pushed it past the top or left edge.
#[must_use]
pub fn lens_origin(pointer: ScreenPoint, container: Size, config: MagnifierConfig) -> Point {
    let place = |at: f64, extent: f64| {
        let mut v = at + config.offset;
        if v + config.size > extent {
            v = at - config.size - config.offset;
        }
        if v < 0.0 { config.offset } else { v }
    };
    Point::new(
        place(pointer.x(), container.width),
        place(pointer.y(), container.height),
    )
}
