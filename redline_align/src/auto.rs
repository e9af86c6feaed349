// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment from page sizes alone.
//!
//! Revisions exported at the same page size overlay 1:1. Revisions at a
//! different size but the same aspect ratio only need a uniform scale.
//! Anything else needs points picked by hand (see [`crate::AlignmentTool`]).

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::Size;

use crate::similarity::AlignmentTransform;

/// Tolerances for [`auto_align`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoAlignConfig {
    /// Maximum relative difference treated as equal, for both the size
    /// ratios and the aspect ratio comparison. `0.02` is 2%.
    pub tolerance: f64,
}

impl Default for AutoAlignConfig {
    fn default() -> Self {
        Self { tolerance: 0.02 }
    }
}

/// Measured relationship between two page sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeMatch {
    /// Base page size.
    pub base: Size,
    /// Candidate page size.
    pub candidate: Size,
    /// `candidate.width / base.width`.
    pub width_ratio: f64,
    /// `candidate.height / base.height`.
    pub height_ratio: f64,
}

impl SizeMatch {
    /// Measures `candidate` against `base`.
    #[must_use]
    pub fn new(base: Size, candidate: Size) -> Self {
        Self {
            base,
            candidate,
            width_ratio: candidate.width / base.width,
            height_ratio: candidate.height / base.height,
        }
    }

    /// Both ratios are within `tolerance` of `1`.
    #[must_use]
    pub fn is_same_size(&self, tolerance: f64) -> bool {
        (self.width_ratio - 1.0).abs() <= tolerance && (self.height_ratio - 1.0).abs() <= tolerance
    }

    /// The two ratios are within `tolerance` of each other.
    #[must_use]
    pub fn is_same_aspect(&self, tolerance: f64) -> bool {
        (self.width_ratio - self.height_ratio).abs() <= tolerance
    }
}

/// How an automatic alignment was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoAlignKind {
    /// The pages match; the identity transform overlays them.
    SameSize,
    /// The pages share an aspect ratio; a uniform scale overlays them.
    Scaled,
}

/// A successful automatic alignment.
///
/// `Display` renders a short status line for the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoAlignment {
    /// Which rule applied.
    pub kind: AutoAlignKind,
    /// Candidate → base transform.
    pub transform: AlignmentTransform,
    /// The measured sizes.
    pub size_match: SizeMatch,
}

impl fmt::Display for AutoAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AutoAlignKind::SameSize => f.write_str("Same size detected - aligned 1:1"),
            AutoAlignKind::Scaled => {
                // Halves round up, not to even.
                let percent = (self.transform.scale * 100.0 + 0.5).floor();
                write!(f, "Scaled to match ({percent}%)")
            }
        }
    }
}

/// Reasons [`auto_align`] could not produce a transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AutoAlignError {
    /// One of the pages has no area, so no ratio can be measured.
    EmptyPage {
        /// Base page size.
        base: Size,
        /// Candidate page size.
        candidate: Size,
    },
    /// The aspect ratios differ beyond tolerance; use manual alignment.
    AspectMismatch(SizeMatch),
}

impl fmt::Display for AutoAlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPage { base, candidate } => write!(
                f,
                "cannot auto-align an empty page (base {}x{}, candidate {}x{})",
                base.width, base.height, candidate.width, candidate.height
            ),
            Self::AspectMismatch(_) => f.write_str("Different aspect ratios - use manual alignment"),
        }
    }
}

impl core::error::Error for AutoAlignError {}

/// Aligns two revisions from their page sizes.
///
/// ```
/// use kurbo::Size;
/// use redline_align::{AutoAlignConfig, AutoAlignKind, auto_align};
///
/// let a4_at_72 = Size::new(595.0, 842.0);
/// let a4_at_144 = Size::new(1190.0, 1684.0);
/// let aligned = auto_align(a4_at_72, a4_at_144, AutoAlignConfig::default()).unwrap();
/// assert_eq!(aligned.kind, AutoAlignKind::Scaled);
/// assert_eq!(aligned.transform.scale, 0.5);
/// assert_eq!(aligned.to_string(), "Scaled to match (50%)");
/// ```
pub fn auto_align(
    base: Size,
    candidate: Size,
    config: AutoAlignConfig,
) -> Result<AutoAlignment, AutoAlignError> {
    if !has_area(base) || !has_area(candidate) {
        return Err(AutoAlignError::EmptyPage { base, candidate });
    }

    let size_match = SizeMatch::new(base, candidate);
    let aligned = if size_match.is_same_size(config.tolerance) {
        AutoAlignment {
            kind: AutoAlignKind::SameSize,
            transform: AlignmentTransform::IDENTITY,
            size_match,
        }
    } else if size_match.is_same_aspect(config.tolerance) {
        AutoAlignment {
            kind: AutoAlignKind::Scaled,
            transform: AlignmentTransform::uniform_scale(1.0 / size_match.width_ratio),
            size_match,
        }
    } else {
        tracing::debug!(
            width_ratio = size_match.width_ratio,
            height_ratio = size_match.height_ratio,
            "aspect ratios differ, manual alignment required"
        );
        return Err(AutoAlignError::AspectMismatch(size_match));
    };

    tracing::debug!(kind = ?aligned.kind, scale = aligned.transform.scale, "auto-aligned");
    Ok(aligned)
}

/// Returns `true` if both pages have area and match within `tolerance`.
#[must_use]
pub fn is_same_size(base: Size, candidate: Size, tolerance: f64) -> bool {
    has_area(base) && has_area(candidate) && SizeMatch::new(base, candidate).is_same_size(tolerance)
}

fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}
