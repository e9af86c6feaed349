// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::points::{DrawingUnitPoint, NormalizedPoint};

/// Pan/zoom currently applied to a drawing layer inside its container.
///
/// Drawing units map to screen pixels as `screen = units * scale + translate`.
/// The value is owned by whoever handles pan/zoom gestures (see
/// [`crate::DrawingViewer`]); transform functions only ever read it.
///
/// `scale` must be strictly positive. A zero or negative scale makes the
/// inverse mapping undefined; transform functions `debug_assert!` this.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ViewportState {
    /// Horizontal pan offset in screen pixels.
    pub translate_x: f64,
    /// Vertical pan offset in screen pixels.
    pub translate_y: f64,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl ViewportState {
    /// No pan, unit zoom.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Creates a viewport state from a pan offset and a zoom factor.
    #[must_use]
    pub const fn new(translate: Vec2, scale: f64) -> Self {
        Self {
            translate_x: translate.x,
            translate_y: translate.y,
            scale,
        }
    }

    /// Pan offset as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns `true` if the state can be inverted: finite pan and a finite,
    /// strictly positive scale.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.translate_x.is_finite()
            && self.translate_y.is_finite()
            && self.scale.is_finite()
            && self.scale > 0.0
    }

    /// Drawing units → screen pixels as an affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation()) * Affine::scale(self.scale)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Native size of a rendered drawing page, in drawing units.
///
/// A zero (or negative) extent on an axis is tolerated: normalization along
/// that axis degrades to `0` instead of dividing by zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerDimensions {
    /// Page width in drawing units.
    pub width: f64,
    /// Page height in drawing units.
    pub height: f64,
}

impl LayerDimensions {
    /// Creates layer dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The dimensions as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The page rectangle in drawing units, anchored at the origin.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size())
    }

    /// Returns `true` if either axis has no positive extent.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width.is_nan() || self.height.is_nan() || self.width <= 0.0 || self.height <= 0.0
    }

    /// Drawing units → normalized space, without clamping.
    ///
    /// A degenerate axis yields exactly `0`.
    #[must_use]
    pub fn normalize(&self, pt: DrawingUnitPoint) -> NormalizedPoint {
        NormalizedPoint::new(
            normalize_axis(pt.x(), self.width),
            normalize_axis(pt.y(), self.height),
        )
    }

    /// Normalized space → drawing units.
    #[must_use]
    pub fn denormalize(&self, pt: NormalizedPoint) -> DrawingUnitPoint {
        DrawingUnitPoint::new(pt.x() * self.width, pt.y() * self.height)
    }
}

impl From<Size> for LayerDimensions {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

fn normalize_axis(v: f64, extent: f64) -> f64 {
    if extent > 0.0 { v / extent } else { 0.0 }
}

/// Bounding rectangle of the viewer container at the moment of interaction,
/// in page-level screen pixels.
///
/// Supplied by the host UI; callers re-measure it after resize or scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ContainerRect {
    /// Creates a container rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Width and height.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The rectangle in page-level coordinates.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }
}

impl From<Rect> for ContainerRect {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

/// Absolute pointer coordinates carried by a mouse, pen or touch event.
///
/// The UI layer builds this from whatever event type it receives before
/// calling into Redline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerPosition {
    /// Page-level horizontal position.
    pub x: f64,
    /// Page-level vertical position.
    pub y: f64,
}

impl PointerPosition {
    /// Creates a pointer position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for PointerPosition {
    fn from(pt: Point) -> Self {
        Self::new(pt.x, pt.y)
    }
}
