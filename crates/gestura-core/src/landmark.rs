//! Landmark frames - the per-frame hand detector contract
//!
//! The detector hands us zero or more hands per video frame, each an ordered
//! array of 21 landmarks in normalized image space. That input is untrusted:
//! [`LandmarkFrame`] is the raw wire shape and [`LandmarkFrame::validate`]
//! turns it into a [`HandSet`] the classifier can rely on.

use serde::{Deserialize, Serialize};

use crate::{FrameTime, GesturaError, GesturaResult, Vec2};

/// Landmarks per hand
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Hands the pipeline interprets per frame; extras are discarded
pub const MAX_HANDS: usize = 2;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// A single tracked hand point
///
/// `x`/`y` are normalized to `[0, 1]` relative to the camera frame. `z` is a
/// relative depth whose sign and scale are not calibrated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Image-plane position (depth dropped)
    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Image-plane distance to another landmark
    #[inline]
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        self.xy().distance(&other.xy())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// One validated hand: exactly 21 finite landmarks in detector order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks([Landmark; HAND_LANDMARK_COUNT]);

impl HandLandmarks {
    /// Validate a detector hand
    pub fn from_slice(points: &[Landmark]) -> GesturaResult<Self> {
        if points.len() != HAND_LANDMARK_COUNT {
            return Err(GesturaError::LandmarkCount {
                expected: HAND_LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(GesturaError::NonFiniteLandmark(idx));
        }

        let mut landmarks = [Landmark::default(); HAND_LANDMARK_COUNT];
        landmarks.copy_from_slice(points);
        Ok(Self(landmarks))
    }

    /// Landmark by detector index (see the index constants)
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.0.get(index)
    }

    #[inline]
    pub fn wrist(&self) -> Landmark {
        self.0[WRIST]
    }

    #[inline]
    pub fn index_tip(&self) -> Landmark {
        self.0[INDEX_TIP]
    }

    #[inline]
    pub fn middle_tip(&self) -> Landmark {
        self.0[MIDDLE_TIP]
    }

    #[inline]
    pub fn ring_tip(&self) -> Landmark {
        self.0[RING_TIP]
    }

    #[inline]
    pub fn pinky_tip(&self) -> Landmark {
        self.0[PINKY_TIP]
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.0
    }
}

/// Raw detector output for one video frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    /// Capture time, if the source stamps frames
    #[serde(default)]
    pub timestamp: Option<FrameTime>,

    /// Detected hands; an empty list means no hands, not an error
    #[serde(default)]
    pub hands: Vec<Vec<Landmark>>,
}

impl LandmarkFrame {
    /// Frame with no hands
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(hands: Vec<Vec<Landmark>>) -> Self {
        Self {
            timestamp: None,
            hands,
        }
    }

    pub fn with_timestamp(mut self, timestamp: FrameTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Interpret the frame.
    ///
    /// Only the first [`MAX_HANDS`] hands are considered. Any considered hand
    /// that fails validation makes the whole frame malformed.
    pub fn validate(&self) -> GesturaResult<HandSet> {
        let mut considered = self.hands.iter().take(MAX_HANDS);

        match (considered.next(), considered.next()) {
            (None, _) => Ok(HandSet::None),
            (Some(first), None) => Ok(HandSet::One(HandLandmarks::from_slice(first)?)),
            (Some(first), Some(second)) => Ok(HandSet::Two(
                HandLandmarks::from_slice(first)?,
                HandLandmarks::from_slice(second)?,
            )),
        }
    }

    /// Number of hands the detector reported (before truncation)
    pub fn reported_hands(&self) -> usize {
        self.hands.len()
    }
}

/// Validated hands of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandSet {
    None,
    One(HandLandmarks),
    Two(HandLandmarks, HandLandmarks),
}

impl HandSet {
    pub fn count(&self) -> usize {
        match self {
            HandSet::None => 0,
            HandSet::One(_) => 1,
            HandSet::Two(_, _) => 2,
        }
    }
}
