// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distinct point types for each coordinate space.
//!
//! A raw [`kurbo::Point`] carries no information about which space it lives
//! in. Redline wraps it once per space so that a screen point can never be
//! handed to a function expecting a normalized one:
//!
//! - [`ScreenPoint`]: pixels relative to the viewer container's top-left corner.
//! - [`NormalizedPoint`]: `[0, 1] × [0, 1]` relative to the full drawing page.
//! - [`DrawingUnitPoint`]: the page's native rendering units (for example PDF points).

use kurbo::{Point, Vec2};

macro_rules! point_space {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub Point);

        impl $name {
            /// The origin of this space.
            pub const ORIGIN: Self = Self(Point::ORIGIN);

            /// Creates a point from its components.
            #[must_use]
            pub const fn new(x: f64, y: f64) -> Self {
                Self(Point::new(x, y))
            }

            /// Horizontal component.
            #[must_use]
            pub fn x(self) -> f64 {
                self.0.x
            }

            /// Vertical component.
            #[must_use]
            pub fn y(self) -> f64 {
                self.0.y
            }

            /// Returns the underlying untyped point.
            #[must_use]
            pub fn to_point(self) -> Point {
                self.0
            }

            /// Offsets the point by `delta`, staying in the same space.
            #[must_use]
            pub fn offset(self, delta: Vec2) -> Self {
                Self(self.0 + delta)
            }

            /// Returns `true` if both components are finite.
            #[must_use]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }
    };
}

point_space! {
    /// A point in screen space: pixels relative to the container's top-left corner.
    ///
    /// Screen points are never clamped; a marker that has been panned out of
    /// view has coordinates outside the container rectangle.
    ScreenPoint
}

point_space! {
    /// A point in normalized drawing space.
    ///
    /// `(0, 0)` is the top-left corner of the page and `(1, 1)` the
    /// bottom-right, independent of the current pan and zoom. Values outside
    /// `[0, 1]` can still be represented (for example coordinates reported by
    /// an external comparison service); see [`crate::is_point_in_bounds`].
    NormalizedPoint
}

point_space! {
    /// A point in the drawing's native, unnormalized units.
    DrawingUnitPoint
}

impl NormalizedPoint {
    /// The page centre.
    pub const CENTER: Self = Self::new(0.5, 0.5);

    /// Clamps both components into `[0, 1]`.
    ///
    /// A `NaN` component becomes `0`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(clamp_unit(self.0.x), clamp_unit(self.0.y))
    }

    /// Returns `true` if the point lies inside the page, boundaries included.
    #[must_use]
    pub fn is_in_bounds(self) -> bool {
        crate::is_point_in_bounds(self)
    }
}

/// `max` then `min`, so `NaN` collapses to `0` instead of propagating.
fn clamp_unit(v: f64) -> f64 {
    v.max(0.0).min(1.0)
}
