// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior applied by [`crate::DrawingViewer`] after panning and zooming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClampMode {
    /// Do not apply any clamping; the page may be panned entirely out of view.
    None,
    /// Pull the pan back whenever the page would leave the container
    /// completely, so that at least some of it stays visible.
    #[default]
    KeepSomeVisible,
}

/// How [`crate::DrawingViewer::fit_layer`] positions the page inside the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitMode {
    /// Center the page in the container; the shorter axis gets equal margins.
    #[default]
    Center,
    /// Pin the page's top-left corner to the container's top-left corner.
    AlignMin,
}
