// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Redline Align: overlaying one drawing revision onto another.
//!
//! Two revisions of a drawing rarely line up pixel for pixel. They may be
//! exported at different resolutions, rotated by a scan, or shifted on the
//! sheet. This crate finds the similarity transform (uniform scale, rotation
//! and translation in normalized space) that carries the candidate revision
//! onto the base revision.
//!
//! - [`auto_align`] handles the common case where only the page size changed.
//! - [`AlignmentTool`] drives manual alignment from two picked feature pairs.
//! - [`AlignmentTransform`] is the result, usable as a kurbo
//!   [`Affine`](kurbo::Affine) or as CSS for a web overlay.
//!
//! Points come from [`redline_view`] as [`NormalizedPoint`](redline_view::NormalizedPoint)s,
//! so alignment survives any pan or zoom of either viewer.
//!
//! ## Aligning from a pointer event
//!
//! ```rust
//! use redline_align::{AlignmentTool, Layer};
//! use redline_view::{ContainerRect, LayerDimensions, PointerPosition, ViewportState, event_to_drawing_point};
//!
//! let container = ContainerRect::new(0.0, 0.0, 1000.0, 500.0);
//! let layer = LayerDimensions::new(1000.0, 500.0);
//! let click = |x, y| event_to_drawing_point(PointerPosition::new(x, y), container, ViewportState::IDENTITY, layer);
//!
//! let mut tool = AlignmentTool::new();
//! tool.start();
//! tool.pick(Layer::Base, click(100.0, 100.0)).unwrap();
//! tool.pick(Layer::Base, click(900.0, 100.0)).unwrap();
//! tool.pick(Layer::Candidate, click(150.0, 100.0)).unwrap();
//! tool.pick(Layer::Candidate, click(950.0, 100.0)).unwrap();
//!
//! let t = tool.transform();
//! assert!((t.scale - 1.0).abs() < 1e-12);
//! assert!((t.translate_x + 0.05).abs() < 1e-12);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo` and `redline_view`.
//! - `serde`: `Serialize`/`Deserialize` for transforms, points and configuration.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod auto;
mod similarity;
mod tool;

pub use auto::{
    AutoAlignConfig, AutoAlignError, AutoAlignKind, AutoAlignment, SizeMatch, auto_align,
    is_same_size,
};
pub use similarity::{AlignmentPoints, AlignmentTransform, CssMatrix, CssTransform};
pub use tool::{
    Adjustment, AlignmentPhase, AlignmentTool, GuideLine, Layer, Marker, PickError, PickedPoints,
};
