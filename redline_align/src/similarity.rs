// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Vec2};
use redline_view::NormalizedPoint;

/// Below this length a pair of picked points is treated as coincident and
/// the scale falls back to `1`.
const MIN_SPAN: f64 = 0.001;

/// Two corresponding point pairs picked on the base and candidate drawings.
///
/// `base_a` and `candidate_a` mark the same feature on each revision, as do
/// `base_b` and `candidate_b`. All points are normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AlignmentPoints {
    /// First feature on the base drawing.
    pub base_a: NormalizedPoint,
    /// Second feature on the base drawing.
    pub base_b: NormalizedPoint,
    /// First feature on the candidate drawing.
    pub candidate_a: NormalizedPoint,
    /// Second feature on the candidate drawing.
    pub candidate_b: NormalizedPoint,
}

/// Uniform scale, rotation and translation mapping candidate space onto base
/// space.
///
/// Applied as `p' = R(rotation) · (scale · p) + translate`, all in
/// normalized units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AlignmentTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// Horizontal translation applied after scale and rotation.
    pub translate_x: f64,
    /// Vertical translation applied after scale and rotation.
    pub translate_y: f64,
}

impl AlignmentTransform {
    /// The transform that leaves every point where it is.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// A pure uniform scale about the origin.
    #[must_use]
    pub const fn uniform_scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    /// Computes the transform that carries the candidate pair onto the base pair.
    ///
    /// 1. `scale` is the ratio of the base span to the candidate span, or `1`
    ///    when the candidate points coincide.
    /// 2. `rotation` is the angle from the candidate span to the base span.
    /// 3. The translation moves the scaled, rotated `candidate_a` onto `base_a`.
    ///
    /// ```
    /// use redline_align::{AlignmentPoints, AlignmentTransform};
    /// use redline_view::NormalizedPoint;
    ///
    /// // The candidate is the base shrunk to half size.
    /// let t = AlignmentTransform::from_points(AlignmentPoints {
    ///     base_a: NormalizedPoint::new(0.2, 0.2),
    ///     base_b: NormalizedPoint::new(0.8, 0.2),
    ///     candidate_a: NormalizedPoint::new(0.1, 0.1),
    ///     candidate_b: NormalizedPoint::new(0.4, 0.1),
    /// });
    /// assert!((t.scale - 2.0).abs() < 1e-12);
    /// assert!(t.rotation.abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_points(points: AlignmentPoints) -> Self {
        let base_span = points.base_b.to_point() - points.base_a.to_point();
        let candidate_span = points.candidate_b.to_point() - points.candidate_a.to_point();

        let candidate_len = candidate_span.length();
        let scale = if candidate_len > MIN_SPAN {
            base_span.length() / candidate_len
        } else {
            1.0
        };
        let rotation = base_span.atan2() - candidate_span.atan2();

        let moved_a = rotate(points.candidate_a.to_point().to_vec2() * scale, rotation);
        let translate = points.base_a.to_point().to_vec2() - moved_a;

        Self {
            scale,
            rotation,
            translate_x: translate.x,
            translate_y: translate.y,
        }
    }

    /// Returns a copy shifted by `delta` normalized units.
    #[must_use]
    pub fn nudged(self, delta: Vec2) -> Self {
        Self {
            translate_x: self.translate_x + delta.x,
            translate_y: self.translate_y + delta.y,
            ..self
        }
    }

    /// Returns a copy with `degrees` added to the rotation.
    #[must_use]
    pub fn rotated_by_degrees(self, degrees: f64) -> Self {
        Self {
            rotation: self.rotation + degrees.to_radians(),
            ..self
        }
    }

    /// Returns a copy with `delta` added to the scale, never dropping below `0.001`.
    #[must_use]
    pub fn scaled_by(self, delta: f64) -> Self {
        Self {
            scale: (self.scale + delta).max(MIN_SPAN),
            ..self
        }
    }

    /// Translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Rotation in degrees.
    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    /// Maps a candidate-space point into base space.
    #[must_use]
    pub fn apply(&self, point: NormalizedPoint) -> NormalizedPoint {
        NormalizedPoint(self.to_affine() * point.to_point())
    }

    /// The transform from base space back to candidate space.
    ///
    /// A scale at or below `0.001` is treated as `1`, mirroring the guard in
    /// [`from_points`](Self::from_points).
    #[must_use]
    pub fn inverse(&self) -> Self {
        let scale = if self.scale > MIN_SPAN {
            1.0 / self.scale
        } else {
            1.0
        };
        let rotation = -self.rotation;
        let translate = -rotate(self.translation(), rotation) * scale;
        Self {
            scale,
            rotation,
            translate_x: translate.x,
            translate_y: translate.y,
        }
    }

    /// The transform as a kurbo [`Affine`].
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::new(self.coefficients())
    }

    /// Row-major 3×3 matrix `[a, c, e, b, d, f, 0, 0, 1]`.
    #[must_use]
    pub fn matrix(&self) -> [f64; 9] {
        let [a, b, c, d, e, f] = self.coefficients();
        [a, c, e, b, d, f, 0.0, 0.0, 1.0]
    }

    /// CSS `matrix(a, b, c, d, e, f)` with translation in normalized units.
    #[must_use]
    pub fn css_matrix(&self) -> CssMatrix {
        CssMatrix(self.coefficients())
    }

    /// CSS transform list with percentage translation, for an element whose
    /// `transform-origin` is its top-left corner and whose size is the page.
    #[must_use]
    pub fn css_transform(&self) -> CssTransform {
        CssTransform(*self)
    }

    fn coefficients(&self) -> [f64; 6] {
        let (sin, cos) = unit_angle(self.rotation);
        let s = self.scale;
        [
            s * cos,
            s * sin,
            -s * sin,
            s * cos,
            self.translate_x,
            self.translate_y,
        ]
    }
}

impl Default for AlignmentTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn unit_angle(theta: f64) -> (f64, f64) {
    let v = Vec2::from_angle(theta);
    (v.y, v.x)
}

fn rotate(v: Vec2, theta: f64) -> Vec2 {
    let (sin, cos) = unit_angle(theta);
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Formats as `matrix(a, b, c, d, e, f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssMatrix(pub [f64; 6]);

impl fmt::Display for CssMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` turns `-0` into `0`.
        let [a, b, c, d, e, g] = self.0.map(|v| v + 0.0);
        write!(f, "matrix({a}, {b}, {c}, {d}, {e}, {g})")
    }
}

/// Formats as `translate(x%, y%) rotate(deg) scale(s)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssTransform(pub AlignmentTransform);

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.0;
        write!(
            f,
            "translate({}%, {}%) rotate({}deg) scale({})",
            t.translate_x * 100.0,
            t.translate_y * 100.0,
            t.rotation_degrees(),
            t.scale
        )
    }
}
