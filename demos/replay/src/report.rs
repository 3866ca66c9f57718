//! Per-frame output records

use std::fmt;

use gestura_core::{GestureState, GestureType, Quat, Vec2};
use gestura_transform::ObjectTransform;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub frame: usize,
    pub gesture: GestureType,
    pub hand_present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<Vec2>,
    pub scale: f32,
    pub orientation: Quat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovered: Option<String>,
}

impl FrameReport {
    pub fn new(
        frame: usize,
        state: &GestureState,
        transform: &ObjectTransform,
        hovered: Option<String>,
    ) -> Self {
        Self {
            frame,
            gesture: state.gesture,
            hand_present: state.hand_present,
            pointer: state.pointer(),
            scale: transform.scale,
            orientation: transform.orientation,
            hovered,
        }
    }
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.gesture.hud_label() {
            Some(label) => label,
            None if self.hand_present => "HAND DETECTED",
            None => "NO HAND",
        };
        write!(
            f,
            "{:>5}  {:<20} scale {:>5.2}  q({:+.3}, {:+.3}, {:+.3}, {:+.3})",
            self.frame,
            status,
            self.scale,
            self.orientation.w,
            self.orientation.x,
            self.orientation.y,
            self.orientation.z
        )?;
        if let Some(p) = self.pointer {
            write!(f, "  pointer ({:+.2}, {:+.2})", p.x, p.y)?;
        }
        if let Some(atom) = &self.hovered {
            write!(f, "  [{}]", atom)?;
        }
        Ok(())
    }
}
