//! Hand landmark data structures.
//!
//! Models the 21 keypoints per hand produced by the external landmark
//! detector, in image pixel coordinates (y grows downward) plus a relative
//! depth value.

use std::ops::Index;

use crate::error::{GestureError, Result};

// ── Landmark indices ───────────────────────────────────────

/// The 21 hand keypoints, in detector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIndex {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Total number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

impl LandmarkIndex {
    /// Convert to array index (0-20).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

// ── Landmark ───────────────────────────────────────────────

/// One detected keypoint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    /// Horizontal pixel position.
    pub x: i32,
    /// Vertical pixel position, increasing downward.
    pub y: i32,
    /// Relative depth as reported by the detector. Not used for classification.
    pub z: f32,
}

impl Landmark {
    pub fn new(x: i32, y: i32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in the image plane, ignoring depth.
    pub fn distance_xy(&self, other: &Landmark) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }
}

// ── Hand ───────────────────────────────────────────────────

/// A validated set of exactly 21 landmarks for one hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Build from a detector-ordered slice.
    ///
    /// Fails with `InvalidInput` unless the slice holds exactly 21 points.
    pub fn from_slice(points: &[Landmark]) -> Result<Self> {
        let points: [Landmark; LANDMARK_COUNT] = points.try_into().map_err(|_| {
            GestureError::invalid_input(format!(
                "expected {} landmarks, got {}",
                LANDMARK_COUNT,
                points.len()
            ))
        })?;
        Ok(Self { points })
    }

    pub fn get(&self, idx: LandmarkIndex) -> &Landmark {
        &self.points[idx.index()]
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.points
    }
}

impl From<[Landmark; LANDMARK_COUNT]> for HandLandmarks {
    fn from(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }
}

impl<'a> TryFrom<&'a [Landmark]> for HandLandmarks {
    type Error = GestureError;

    fn try_from(points: &'a [Landmark]) -> Result<Self> {
        Self::from_slice(points)
    }
}

impl Index<LandmarkIndex> for HandLandmarks {
    type Output = Landmark;

    fn index(&self, idx: LandmarkIndex) -> &Landmark {
        self.get(idx)
    }
}
