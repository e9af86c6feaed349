// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::bounds::is_point_in_bounds;
use crate::points::{NormalizedPoint, ScreenPoint};
use crate::transform::drawing_to_screen_point;
use crate::viewport::{LayerDimensions, ViewportState};

/// Where a change marker lands on screen for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedMarker {
    /// The marker's normalized source coordinate.
    pub source: NormalizedPoint,
    /// Container-relative screen position. Not clamped.
    pub screen: ScreenPoint,
    /// The source coordinate lies on the page.
    pub in_bounds: bool,
    /// The screen position lies inside the container, edges included.
    pub on_screen: bool,
}

impl ProjectedMarker {
    /// Returns `true` if the marker should be drawn: on the page and currently in view.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.in_bounds && self.on_screen
    }
}

/// Projects an externally reported normalized coordinate into screen space.
///
/// Coordinates from a comparison service are not trusted to lie on the page,
/// so the projection records the bounds check alongside the screen position
/// instead of clamping.
#[must_use]
pub fn project_marker(
    point: NormalizedPoint,
    viewport: ViewportState,
    layer: LayerDimensions,
    container: Size,
) -> ProjectedMarker {
    let screen = drawing_to_screen_point(point, viewport, layer);
    let view = Rect::from_origin_size(Point::ORIGIN, container);
    let on_screen = (view.x0..=view.x1).contains(&screen.x())
        && (view.y0..=view.y1).contains(&screen.y());
    ProjectedMarker {
        source: point,
        screen,
        in_bounds: is_point_in_bounds(point),
        on_screen,
    }
}

/// Projects a batch of markers with one viewport snapshot.
pub fn project_markers<I>(
    points: I,
    viewport: ViewportState,
    layer: LayerDimensions,
    container: Size,
) -> impl Iterator<Item = ProjectedMarker>
where
    I: IntoIterator<Item = NormalizedPoint>,
{
    points
        .into_iter()
        .map(move |p| project_marker(p, viewport, layer, container))
}
