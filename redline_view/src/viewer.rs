// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::modes::{ClampMode, FitMode};
use crate::points::{DrawingUnitPoint, NormalizedPoint, ScreenPoint};
use crate::transform::{drawing_units_to_screen, screen_to_drawing_units};
use crate::viewport::{LayerDimensions, ViewportState};

/// Pan/zoom controller for one drawing layer inside its container.
///
/// `DrawingViewer` owns the mutable side of the viewport: gesture handlers
/// call [`pan_by`](Self::pan_by), [`zoom_about`](Self::zoom_about) and
/// [`fit_layer`](Self::fit_layer), and every transform call receives an
/// immutable [`ViewportState`] snapshot from [`state`](Self::state). Two
/// viewers never share state, so side-by-side comparisons need no
/// coordination.
///
/// ```
/// use kurbo::Size;
/// use redline_view::{DrawingViewer, LayerDimensions, NormalizedPoint, ScreenPoint};
///
/// let mut viewer = DrawingViewer::new(Size::new(800.0, 600.0), LayerDimensions::new(1600.0, 1200.0));
/// viewer.fit_layer();
/// assert_eq!(viewer.state().scale, 0.5);
///
/// let center = viewer.screen_to_drawing(ScreenPoint::new(400.0, 300.0));
/// assert_eq!(center, NormalizedPoint::CENTER);
/// ```
#[derive(Clone, Debug)]
pub struct DrawingViewer {
    container: Size,
    layer: LayerDimensions,
    state: ViewportState,
    min_scale: f64,
    max_scale: f64,
    clamp_mode: ClampMode,
    fit_mode: FitMode,
}

impl DrawingViewer {
    /// Creates a viewer with no pan and unit zoom.
    ///
    /// Zoom is clamped to `[1e-3, 1e3]` by default.
    #[must_use]
    pub fn new(container: Size, layer: LayerDimensions) -> Self {
        Self {
            container,
            layer,
            state: ViewportState::IDENTITY,
            min_scale: 1e-3,
            max_scale: 1e3,
            clamp_mode: ClampMode::default(),
            fit_mode: FitMode::default(),
        }
    }

    /// Snapshot of the current pan/zoom.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Replaces the pan/zoom, for example when restoring a saved view.
    ///
    /// The scale is clamped into the configured limits. States that cannot be
    /// inverted (non-finite values or a non-positive scale) are ignored.
    pub fn set_state(&mut self, state: ViewportState) {
        if !state.is_valid() {
            tracing::debug!(?state, "ignoring non-invertible viewport state");
            return;
        }
        self.state = ViewportState {
            scale: state.scale.clamp(self.min_scale, self.max_scale),
            ..state
        };
        self.clamp_to_bounds();
    }

    /// Current container size in screen pixels.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Updates the container size after a resize.
    ///
    /// Pan and zoom are kept; only clamping is re-applied.
    pub fn set_container_size(&mut self, size: Size) {
        if self.container == size {
            return;
        }
        self.container = size;
        self.clamp_to_bounds();
    }

    /// Native size of the displayed page.
    #[must_use]
    pub fn layer_dimensions(&self) -> LayerDimensions {
        self.layer
    }

    /// Switches to a page with different native dimensions.
    pub fn set_layer_dimensions(&mut self, layer: LayerDimensions) {
        if self.layer == layer {
            return;
        }
        self.layer = layer;
        self.clamp_to_bounds();
    }

    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The range is reordered if needed and must stay strictly positive;
    /// non-positive limits are ignored. The current zoom is clamped into the
    /// new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        if !(min_scale.is_finite() && max_scale.is_finite()) || min_scale <= 0.0 {
            tracing::debug!(min_scale, max_scale, "ignoring invalid scale limits");
            return;
        }
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.set_scale(self.state.scale);
    }

    /// Sets the clamp mode for panning relative to the page.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_to_bounds();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets how [`fit_layer`](Self::fit_layer) positions the page.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Sets the zoom factor, keeping the pan offset.
    ///
    /// The value is clamped into the configured limits; non-finite values
    /// are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if (self.state.scale - clamped).abs() < f64::EPSILON {
            return;
        }
        self.state.scale = clamped;
        self.clamp_to_bounds();
    }

    /// Pans by a delta in screen pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.state.translate_x += delta.x;
        self.state.translate_y += delta.y;
        self.clamp_to_bounds();
    }

    /// Zooms by `factor` around a container-relative anchor.
    ///
    /// The drawing location under the anchor stays under the anchor, up to
    /// the zoom limits. Non-positive factors are ignored.
    pub fn zoom_about(&mut self, anchor: ScreenPoint, factor: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        let old_scale = self.state.scale;
        let new_scale = (old_scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return;
        }

        let under_anchor = screen_to_drawing_units(anchor, self.state);
        self.state.scale = new_scale;
        let moved = drawing_units_to_screen(under_anchor, self.state);
        self.pan_by(anchor.to_point() - moved.to_point());
    }

    /// Fits the whole page into the container, preserving aspect ratio.
    ///
    /// No-op when either the page or the container has no area.
    pub fn fit_layer(&mut self) {
        if self.layer.is_degenerate() {
            return;
        }
        if self.container.width <= 0.0 || self.container.height <= 0.0 {
            return;
        }

        let sx = self.container.width / self.layer.width;
        let sy = self.container.height / self.layer.height;
        let scale = sx.min(sy).clamp(self.min_scale, self.max_scale);

        let pan = match self.fit_mode {
            FitMode::Center => {
                let container_center = self.container.to_vec2() * 0.5;
                let layer_center = self.layer.size().to_vec2() * 0.5;
                container_center - layer_center * scale
            }
            FitMode::AlignMin => Vec2::ZERO,
        };
        self.state = ViewportState::new(pan, scale);
        self.clamp_to_bounds();
    }

    /// Pans so that `target` sits at the container centre.
    pub fn center_on(&mut self, target: NormalizedPoint) {
        let center = Point::ZERO + self.container.to_vec2() * 0.5;
        let current = self.drawing_to_screen(target);
        self.pan_by(center - current.to_point());
    }

    /// Page region currently visible, in normalized coordinates.
    ///
    /// Not clamped: when the container shows margin around the page the
    /// rectangle extends beyond `[0, 1]`.
    #[must_use]
    pub fn visible_region(&self) -> Rect {
        let units = self.visible_units_rect();
        let p0 = self.layer.normalize(DrawingUnitPoint(units.origin()));
        let p1 = self
            .layer
            .normalize(DrawingUnitPoint::new(units.max_x(), units.max_y()));
        Rect::from_points(p0.to_point(), p1.to_point())
    }

    /// Container-relative screen point → clamped normalized point.
    #[must_use]
    pub fn screen_to_drawing(&self, screen: ScreenPoint) -> NormalizedPoint {
        self.layer
            .normalize(screen_to_drawing_units(screen, self.state))
            .clamped()
    }

    /// Normalized point → container-relative screen point.
    #[must_use]
    pub fn drawing_to_screen(&self, drawing: NormalizedPoint) -> ScreenPoint {
        drawing_units_to_screen(self.layer.denormalize(drawing), self.state)
    }

    /// Snapshot of the viewer state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> DrawingViewerDebugInfo {
        DrawingViewerDebugInfo {
            container: self.container,
            layer: self.layer,
            state: self.state,
            visible_region: self.visible_region(),
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            clamp_mode: self.clamp_mode,
            fit_mode: self.fit_mode,
        }
    }

    fn visible_units_rect(&self) -> Rect {
        let p0 = screen_to_drawing_units(ScreenPoint::ORIGIN, self.state);
        let p1 = screen_to_drawing_units(
            ScreenPoint::new(self.container.width, self.container.height),
            self.state,
        );
        Rect::from_points(p0.to_point(), p1.to_point())
    }

    fn clamp_to_bounds(&mut self) {
        if self.clamp_mode == ClampMode::None || self.layer.is_degenerate() {
            return;
        }
        let bounds = self.layer.rect();

        let visible = self.visible_units_rect();
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return;
        }

        let mut dx = 0.0;
        let mut dy = 0.0;

        if visible.max_x() < bounds.min_x() {
            dx = bounds.min_x() - visible.max_x();
        } else if visible.min_x() > bounds.max_x() {
            dx = bounds.max_x() - visible.min_x();
        }

        if visible.max_y() < bounds.min_y() {
            dy = bounds.min_y() - visible.max_y();
        } else if visible.min_y() > bounds.max_y() {
            dy = bounds.max_y() - visible.min_y();
        }

        if dx != 0.0 || dy != 0.0 {
            // Moving the visible window by +d drawing units means panning the
            // page by -d * scale screen pixels.
            let scale = self.state.scale;
            self.state.translate_x -= dx * scale;
            self.state.translate_y -= dy * scale;
            tracing::trace!(dx, dy, "pulled viewport back onto the page");
        }
    }
}

/// Debug snapshot of a [`DrawingViewer`].
#[derive(Clone, Copy, Debug)]
pub struct DrawingViewerDebugInfo {
    /// Container size in screen pixels.
    pub container: Size,
    /// Native page size.
    pub layer: LayerDimensions,
    /// Current pan/zoom.
    pub state: ViewportState,
    /// Visible page region in normalized coordinates.
    pub visible_region: Rect,
    /// Minimum zoom factor.
    pub min_scale: f64,
    /// Maximum zoom factor.
    pub max_scale: f64,
    /// Clamp mode for panning relative to the page.
    pub clamp_mode: ClampMode,
    /// Fit mode used by [`DrawingViewer::fit_layer`].
    pub fit_mode: FitMode,
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{ClampMode, DrawingViewer, FitMode};
    use crate::points::{NormalizedPoint, ScreenPoint};
    use crate::viewport::{LayerDimensions, ViewportState};

    fn viewer() -> DrawingViewer {
        DrawingViewer::new(Size::new(800.0, 600.0), LayerDimensions::new(1000.0, 500.0))
    }

    #[test]
    fn zoom_about_anchor_keeps_drawing_point_fixed() {
        let mut v = viewer();
        let anchor = ScreenPoint::new(300.0, 200.0);
        let before = v.screen_to_drawing(anchor);

        v.zoom_about(anchor, 2.5);
        let after = v.screen_to_drawing(anchor);

        assert_eq!(v.scale(), 2.5);
        assert!((after.x() - before.x()).abs() < 1e-9);
        assert!((after.y() - before.y()).abs() < 1e-9);
    }

    #[test]
    fn zoom_ignores_non_positive_factor() {
        let mut v = viewer();
        v.zoom_about(ScreenPoint::new(10.0, 10.0), 0.0);
        v.zoom_about(ScreenPoint::new(10.0, 10.0), -2.0);
        assert_eq!(v.state(), ViewportState::IDENTITY);
    }

    #[test]
    fn fit_center_shows_whole_page_centered() {
        let mut v = viewer();
        v.fit_layer();

        let state = v.state();
        assert!((state.scale - 0.8).abs() < 1e-12);
        // 1000x500 at 0.8 is 800x400, leaving 100px above and below.
        assert!((state.translate_x - 0.0).abs() < 1e-9);
        assert!((state.translate_y - 100.0).abs() < 1e-9);

        let region = v.visible_region();
        assert!(region.min_x() <= 1e-9 && region.max_x() >= 1.0 - 1e-9);
        assert!(region.min_y() < 0.0 && region.max_y() > 1.0);
    }

    #[test]
    fn fit_align_min_pins_page_origin() {
        let mut v = viewer();
        v.set_fit_mode(FitMode::AlignMin);
        v.fit_layer();
        let origin = v.drawing_to_screen(NormalizedPoint::ORIGIN);
        assert_eq!(origin, ScreenPoint::ORIGIN);
    }

    #[test]
    fn fit_on_degenerate_layer_is_noop() {
        let mut v = DrawingViewer::new(Size::new(800.0, 600.0), LayerDimensions::new(0.0, 500.0));
        v.fit_layer();
        assert_eq!(v.state(), ViewportState::IDENTITY);
    }

    #[test]
    fn clamping_keeps_some_of_page_visible() {
        let mut v = viewer();
        assert_eq!(v.clamp_mode(), ClampMode::KeepSomeVisible);
        v.pan_by(Vec2::new(5_000.0, 5_000.0));

        let region = v.visible_region();
        assert!(region.max_x() >= -1e-9);
        assert!(region.max_y() >= -1e-9);
        assert!(region.min_x() <= 1.0 + 1e-9);
        assert!(region.min_y() <= 1.0 + 1e-9);
    }

    #[test]
    fn clamp_none_allows_panning_off_page() {
        let mut v = viewer();
        v.set_clamp_mode(ClampMode::None);
        v.pan_by(Vec2::new(5_000.0, 0.0));
        assert_eq!(v.state().translate_x, 5_000.0);
    }

    #[test]
    fn center_on_moves_point_to_container_center() {
        let mut v = viewer();
        v.set_clamp_mode(ClampMode::None);
        v.set_scale(2.0);
        v.center_on(NormalizedPoint::new(0.75, 0.25));
        let screen = v.drawing_to_screen(NormalizedPoint::new(0.75, 0.25));
        assert!((screen.x() - 400.0).abs() < 1e-9);
        assert!((screen.y() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn set_state_rejects_degenerate_scale_and_clamps_limits() {
        let mut v = viewer();
        v.set_state(ViewportState::new(Vec2::new(1.0, 2.0), 0.0));
        assert_eq!(v.state(), ViewportState::IDENTITY);

        v.set_scale_limits(4.0, 0.5);
        v.set_state(ViewportState::new(Vec2::new(1.0, 2.0), 10.0));
        assert_eq!(v.state().scale, 4.0);
        assert_eq!(v.state().translation(), Vec2::new(1.0, 2.0));

        let info = v.debug_info();
        assert_eq!(info.min_scale, 0.5);
        assert_eq!(info.max_scale, 4.0);
    }

    #[test]
    fn invalid_scale_limits_are_ignored() {
        let mut v = viewer();
        v.set_scale_limits(0.0, 10.0);
        let info = v.debug_info();
        assert_eq!(info.min_scale, 1e-3);
        assert_eq!(info.max_scale, 1e3);
    }

    #[test]
    fn set_scale_never_reaches_zero() {
        let mut v = viewer();
        v.set_scale(-5.0);
        assert!(v.scale() > 0.0);
        assert!(v.state().is_valid());
    }
}
