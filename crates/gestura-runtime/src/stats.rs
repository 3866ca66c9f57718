//! Pipeline counters

use gestura_core::{GestureState, GestureType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub frames_ingested: u64,
    pub render_ticks: u64,
    pub none_frames: u64,
    pub grip_frames: u64,
    pub pinch_zoom_frames: u64,
    pub point_frames: u64,
    /// Frames rejected by landmark validation
    pub malformed_frames: u64,
    /// Transitions from hand present to hand absent
    pub hand_losses: u64,
}

impl PipelineStats {
    /// Count one classified frame
    pub fn record(&mut self, previous: &GestureState, state: &GestureState, malformed: bool) {
        self.frames_ingested += 1;
        match state.gesture {
            GestureType::None => self.none_frames += 1,
            GestureType::Grip => self.grip_frames += 1,
            GestureType::PinchZoom => self.pinch_zoom_frames += 1,
            GestureType::Point => self.point_frames += 1,
        }
        if malformed {
            self.malformed_frames += 1;
        }
        if previous.hand_present && !state.hand_present {
            self.hand_losses += 1;
        }
    }

    pub fn gesture_frames(&self, gesture: GestureType) -> u64 {
        match gesture {
            GestureType::None => self.none_frames,
            GestureType::Grip => self.grip_frames,
            GestureType::PinchZoom => self.pinch_zoom_frames,
            GestureType::Point => self.point_frames,
        }
    }
}
