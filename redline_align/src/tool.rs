// Copyright 2026 the Redline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-picking alignment tool.
//!
//! The user picks two features on the base drawing, then the same two
//! features on the candidate drawing. Once the fourth point lands the tool
//! computes an [`AlignmentTransform`] and becomes [`AlignmentPhase::Aligned`].
//!
//! ## Usage
//!
//! 1) Call [`AlignmentTool::start`] when the user enters alignment mode.
//! 2) Route each normalized click to [`AlignmentTool::pick`] with the layer
//!    it landed on. Clicks on the wrong layer come back as a [`PickError`].
//! 3) Draw [`AlignmentTool::markers`] and [`AlignmentTool::guide_lines`] and
//!    show [`AlignmentTool::status_message`].
//! 4) Read [`AlignmentTool::transform`] once [`AlignmentTool::is_aligned`].
//!
//! ```
//! use redline_align::{AlignmentPhase, AlignmentTool, Layer};
//! use redline_view::NormalizedPoint;
//!
//! let mut tool = AlignmentTool::new();
//! tool.start();
//! tool.pick(Layer::Base, NormalizedPoint::new(0.2, 0.2)).unwrap();
//! tool.pick(Layer::Base, NormalizedPoint::new(0.8, 0.2)).unwrap();
//! tool.pick(Layer::Candidate, NormalizedPoint::new(0.1, 0.1)).unwrap();
//! let phase = tool.pick(Layer::Candidate, NormalizedPoint::new(0.4, 0.1)).unwrap();
//!
//! assert_eq!(phase, AlignmentPhase::Aligned);
//! assert!((tool.transform().scale - 2.0).abs() < 1e-12);
//! ```

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Line, Vec2};
use redline_view::NormalizedPoint;

use crate::similarity::{AlignmentPoints, AlignmentTransform};

/// Which drawing revision a click or marker belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    /// The reference revision.
    Base,
    /// The revision being aligned onto the base.
    Candidate,
}

/// Where the tool is in the picking sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentPhase {
    /// Not aligning.
    #[default]
    Idle,
    /// Waiting for the first base point.
    PickingBaseA,
    /// Waiting for the second base point.
    PickingBaseB,
    /// Waiting for the first candidate point.
    PickingCandidateA,
    /// Waiting for the second candidate point.
    PickingCandidateB,
    /// All four points picked; the transform is current.
    Aligned,
}

impl AlignmentPhase {
    /// The layer clicks are expected on, if any.
    #[must_use]
    pub fn active_layer(self) -> Option<Layer> {
        match self {
            Self::PickingBaseA | Self::PickingBaseB => Some(Layer::Base),
            Self::PickingCandidateA | Self::PickingCandidateB => Some(Layer::Candidate),
            Self::Idle | Self::Aligned => None,
        }
    }

    /// Instruction to show the user.
    #[must_use]
    pub fn status_message(self) -> &'static str {
        match self {
            Self::Idle => "Click \"Align\" to start alignment",
            Self::PickingBaseA => "Click point A on the BASE drawing (blue layer)",
            Self::PickingBaseB => "Click point B on the BASE drawing (blue layer)",
            Self::PickingCandidateA => "Click point A on the CANDIDATE drawing (green layer)",
            Self::PickingCandidateB => "Click point B on the CANDIDATE drawing (green layer)",
            Self::Aligned => "Alignment complete. Adjust opacity to compare.",
        }
    }

    fn shows(self, layer: Layer) -> bool {
        self == Self::Aligned || self.active_layer() == Some(layer)
    }
}

/// Points picked so far.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PickedPoints {
    /// First base feature.
    pub base_a: Option<NormalizedPoint>,
    /// Second base feature.
    pub base_b: Option<NormalizedPoint>,
    /// First candidate feature.
    pub candidate_a: Option<NormalizedPoint>,
    /// Second candidate feature.
    pub candidate_b: Option<NormalizedPoint>,
}

impl PickedPoints {
    /// All four points, once they have been picked.
    #[must_use]
    pub fn complete(&self) -> Option<AlignmentPoints> {
        Some(AlignmentPoints {
            base_a: self.base_a?,
            base_b: self.base_b?,
            candidate_a: self.candidate_a?,
            candidate_b: self.candidate_b?,
        })
    }
}

/// A click the tool did not accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickError {
    /// Phase the tool was in.
    pub phase: AlignmentPhase,
    /// Layer that was clicked.
    pub layer: Layer,
}

impl fmt::Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase.active_layer() {
            Some(expected) => write!(
                f,
                "clicked the {:?} layer while waiting for a {:?} point",
                self.layer, expected
            ),
            None => write!(
                f,
                "clicked the {:?} layer while not picking points ({:?})",
                self.layer, self.phase
            ),
        }
    }
}

impl core::error::Error for PickError {}

/// Marker for a picked point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Layer the point was picked on.
    pub layer: Layer,
    /// `"A"` or `"B"`.
    pub label: &'static str,
    /// Normalized position.
    pub point: NormalizedPoint,
    /// `true` for the most recent pick, the one [`AlignmentTool::undo`] would remove.
    pub active: bool,
}

/// Segment from a layer's A point to its B point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideLine {
    /// Layer both points belong to.
    pub layer: Layer,
    /// Point A.
    pub from: NormalizedPoint,
    /// Point B.
    pub to: NormalizedPoint,
}

impl GuideLine {
    /// A→B as a vector in normalized units.
    #[must_use]
    pub fn span(&self) -> Vec2 {
        self.to.to_point() - self.from.to_point()
    }

    /// Length in normalized units.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.span().length()
    }

    /// Direction in radians, measured from +x towards +y.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.span().atan2()
    }

    /// The segment as a kurbo [`Line`].
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::new(self.from.to_point(), self.to.to_point())
    }
}

/// A manual fine-tuning step applied to an aligned transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Adjustment {
    /// Shift by a normalized offset.
    Nudge(Vec2),
    /// Rotate by degrees.
    Rotate(f64),
    /// Add to the uniform scale.
    Scale(f64),
}

impl Adjustment {
    /// Default nudge step: 0.1% of the page.
    pub const NUDGE_STEP: f64 = 0.001;
    /// Default rotation step in degrees.
    pub const ROTATE_STEP: f64 = 0.1;
    /// Default scale step.
    pub const SCALE_STEP: f64 = 0.001;
}

/// State machine for two-point manual alignment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlignmentTool {
    phase: AlignmentPhase,
    points: PickedPoints,
    transform: AlignmentTransform,
}

impl AlignmentTool {
    /// An idle tool with no points and the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a fresh alignment, discarding any previous one.
    pub fn start(&mut self) {
        self.points = PickedPoints::default();
        self.transform = AlignmentTransform::IDENTITY;
        self.set_phase(AlignmentPhase::PickingBaseA);
    }

    /// Leaves alignment mode and discards everything.
    pub fn reset(&mut self) {
        self.points = PickedPoints::default();
        self.transform = AlignmentTransform::IDENTITY;
        self.set_phase(AlignmentPhase::Idle);
    }

    /// Steps back one pick.
    ///
    /// Does nothing while idle or waiting for the first base point.
    pub fn undo(&mut self) {
        let previous = match self.phase {
            AlignmentPhase::Idle | AlignmentPhase::PickingBaseA => return,
            AlignmentPhase::PickingBaseB => {
                self.points.base_a = None;
                AlignmentPhase::PickingBaseA
            }
            AlignmentPhase::PickingCandidateA => {
                self.points.base_b = None;
                AlignmentPhase::PickingBaseB
            }
            AlignmentPhase::PickingCandidateB => {
                self.points.candidate_a = None;
                AlignmentPhase::PickingCandidateA
            }
            AlignmentPhase::Aligned => {
                self.points.candidate_b = None;
                self.transform = AlignmentTransform::IDENTITY;
                AlignmentPhase::PickingCandidateB
            }
        };
        self.set_phase(previous);
    }

    /// Records a click on `layer` for the current phase and returns the new phase.
    ///
    /// Fails without changing anything when the tool is not waiting for a
    /// point on `layer`.
    pub fn pick(
        &mut self,
        layer: Layer,
        point: NormalizedPoint,
    ) -> Result<AlignmentPhase, PickError> {
        let next = match (self.phase, layer) {
            (AlignmentPhase::PickingBaseA, Layer::Base) => {
                self.points.base_a = Some(point);
                AlignmentPhase::PickingBaseB
            }
            (AlignmentPhase::PickingBaseB, Layer::Base) => {
                self.points.base_b = Some(point);
                AlignmentPhase::PickingCandidateA
            }
            (AlignmentPhase::PickingCandidateA, Layer::Candidate) => {
                self.points.candidate_a = Some(point);
                AlignmentPhase::PickingCandidateB
            }
            (AlignmentPhase::PickingCandidateB, Layer::Candidate) => {
                self.points.candidate_b = Some(point);
                if let Some(points) = self.points.complete() {
                    self.transform = AlignmentTransform::from_points(points);
                    tracing::debug!(
                        scale = self.transform.scale,
                        rotation_deg = self.transform.rotation_degrees(),
                        translate_x = self.transform.translate_x,
                        translate_y = self.transform.translate_y,
                        "alignment computed"
                    );
                }
                AlignmentPhase::Aligned
            }
            (phase, layer) => return Err(PickError { phase, layer }),
        };
        self.set_phase(next);
        Ok(next)
    }

    /// Fine-tunes the computed transform. Returns `false` unless aligned.
    pub fn adjust(&mut self, adjustment: Adjustment) -> bool {
        if !self.is_aligned() {
            return false;
        }
        self.transform = match adjustment {
            Adjustment::Nudge(delta) => self.transform.nudged(delta),
            Adjustment::Rotate(degrees) => self.transform.rotated_by_degrees(degrees),
            Adjustment::Scale(delta) => self.transform.scaled_by(delta),
        };
        tracing::trace!(?adjustment, "alignment adjusted");
        true
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> AlignmentPhase {
        self.phase
    }

    /// Points picked so far.
    #[must_use]
    pub fn points(&self) -> &PickedPoints {
        &self.points
    }

    /// Candidate → base transform; identity until aligned.
    #[must_use]
    pub fn transform(&self) -> AlignmentTransform {
        self.transform
    }

    /// Returns `true` while waiting for a point.
    #[must_use]
    pub fn is_aligning(&self) -> bool {
        self.phase.active_layer().is_some()
    }

    /// Returns `true` once all four points are in.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.phase == AlignmentPhase::Aligned
    }

    /// The layer the next click should land on.
    #[must_use]
    pub fn active_layer(&self) -> Option<Layer> {
        self.phase.active_layer()
    }

    /// Instruction for the current phase.
    #[must_use]
    pub fn status_message(&self) -> &'static str {
        self.phase.status_message()
    }

    /// Whether [`undo`](Self::undo) would do anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !matches!(
            self.phase,
            AlignmentPhase::Idle | AlignmentPhase::PickingBaseA
        )
    }

    /// Markers to draw for the current phase.
    ///
    /// Base markers show while picking base points or once aligned, and
    /// candidate markers likewise, so only one layer's markers are visible
    /// during picking.
    #[must_use]
    pub fn markers(&self) -> Vec<Marker> {
        let last = self.last_pick();
        self.slots()
            .into_iter()
            .filter(|(layer, ..)| self.phase.shows(*layer))
            .filter_map(|(layer, label, point)| {
                let point = point?;
                Some(Marker {
                    layer,
                    label,
                    point,
                    active: last == Some((layer, label)),
                })
            })
            .collect()
    }

    /// A→B guide lines for layers that have both points, under the same
    /// visibility rule as [`markers`](Self::markers).
    #[must_use]
    pub fn guide_lines(&self) -> Vec<GuideLine> {
        [
            (Layer::Base, self.points.base_a, self.points.base_b),
            (Layer::Candidate, self.points.candidate_a, self.points.candidate_b),
        ]
        .into_iter()
        .filter(|(layer, ..)| self.phase.shows(*layer))
        .filter_map(|(layer, from, to)| {
            Some(GuideLine {
                layer,
                from: from?,
                to: to?,
            })
        })
        .collect()
    }

    fn slots(&self) -> [(Layer, &'static str, Option<NormalizedPoint>); 4] {
        [
            (Layer::Base, "A", self.points.base_a),
            (Layer::Base, "B", self.points.base_b),
            (Layer::Candidate, "A", self.points.candidate_a),
            (Layer::Candidate, "B", self.points.candidate_b),
        ]
    }

    fn last_pick(&self) -> Option<(Layer, &'static str)> {
        match self.phase {
            AlignmentPhase::Idle | AlignmentPhase::PickingBaseA => None,
            AlignmentPhase::PickingBaseB => Some((Layer::Base, "A")),
            AlignmentPhase::PickingCandidateA => Some((Layer::Base, "B")),
            AlignmentPhase::PickingCandidateB => Some((Layer::Candidate, "A")),
            AlignmentPhase::Aligned => Some((Layer::Candidate, "B")),
        }
    }

    fn set_phase(&mut self, phase: AlignmentPhase) {
        if self.phase != phase {
            tracing::debug!(from = ?self.phase, to = ?phase, "alignment phase changed");
        }
        self.phase = phase;
    }
}
