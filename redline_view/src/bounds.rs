// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::points::NormalizedPoint;

/// Returns `true` if `point` lies on the page: `0 ≤ x ≤ 1` and `0 ≤ y ≤ 1`.
///
/// Boundaries are inclusive. Points produced by
/// [`crate::screen_to_drawing_point`] always pass, so this is mostly useful
/// for coordinates that come from elsewhere, such as change markers reported
/// by a comparison service. `NaN` components are out of bounds.
#[must_use]
pub fn is_point_in_bounds(point: NormalizedPoint) -> bool {
    (0.0..=1.0).contains(&point.x()) && (0.0..=1.0).contains(&point.y())
}
