//! Finger pose - extended/curled state of the four long fingers
//!
//! Only five landmarks matter here: the wrist and the index, middle, ring
//! and pinky tips. The thumb is never read.

use gestura_core::{HandLandmarks, Landmark};

use crate::{ClassifierConfig, FingerThresholds};

/// Reading for one finger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerReading {
    /// Image-plane wrist-to-tip distance
    pub distance: f32,
    pub extended: bool,
    pub curled: bool,
}

impl FingerReading {
    fn measure(wrist: &Landmark, tip: &Landmark, thresholds: &FingerThresholds) -> Self {
        let distance = wrist.planar_distance(tip);
        Self {
            distance,
            extended: distance > thresholds.extended,
            curled: distance < thresholds.curled,
        }
    }
}

/// Pose of the four long fingers of one hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerPose {
    pub index: FingerReading,
    pub middle: FingerReading,
    pub ring: FingerReading,
    pub pinky: FingerReading,
}

impl FingerPose {
    /// Closed fist: index not extended, the other three curled
    pub fn is_grip(&self) -> bool {
        !self.index.extended && self.middle.curled && self.ring.curled && self.pinky.curled
    }

    /// Pointing: index extended, middle and ring curled. The pinky is not
    /// checked; it drifts naturally while pointing.
    pub fn is_point(&self) -> bool {
        self.index.extended && self.middle.curled && self.ring.curled
    }
}

/// Measure the finger pose of a hand against the configured cutoffs
pub fn finger_pose(hand: &HandLandmarks, config: &ClassifierConfig) -> FingerPose {
    let wrist = hand.wrist();
    FingerPose {
        index: FingerReading::measure(&wrist, &hand.index_tip(), &config.index),
        middle: FingerReading::measure(&wrist, &hand.middle_tip(), &config.middle),
        ring: FingerReading::measure(&wrist, &hand.ring_tip(), &config.ring),
        pinky: FingerReading::measure(&wrist, &hand.pinky_tip(), &config.pinky),
    }
}
