//! Gesture state - the classifier's per-frame output
//!
//! A `GestureState` is a complete snapshot of one frame. It carries no
//! cross-frame memory; the classifier and the accumulator own all history.

use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Recognized interaction modes, exactly one active per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureType {
    /// Idle: no hand, or a hand pose that maps to no gesture.
    #[default]
    None,
    /// Closed fist: rotate by moving the wrist.
    Grip,
    /// Two hands: zoom by changing the distance between wrists.
    PinchZoom,
    /// Index finger extended: inspect what the fingertip points at.
    Point,
}

impl GestureType {
    /// All gesture types, in declaration order
    pub const ALL: [GestureType; 4] = [
        GestureType::None,
        GestureType::Grip,
        GestureType::PinchZoom,
        GestureType::Point,
    ];

    /// Stable machine-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Grip => "grip",
            Self::PinchZoom => "pinch-zoom",
            Self::Point => "point",
        }
    }

    /// Status line shown while the gesture is active
    pub fn hud_label(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Grip => Some("ROTATING (GRIP)"),
            Self::PinchZoom => Some("ZOOMING (PINCH)"),
            Self::Point => Some("INSPECTING (POINT)"),
        }
    }

    /// Whether the gesture drives the object transform
    pub fn manipulates_transform(&self) -> bool {
        matches!(self, Self::Grip | Self::PinchZoom)
    }
}

impl std::fmt::Display for GestureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One frame of classified gesture output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    /// Active gesture
    pub gesture: GestureType,

    /// Per-frame rotation signal (not cumulative); zero unless `Grip`
    pub rotation_delta: Vec2,

    /// Per-frame multiplicative zoom, 1.0 = no change; meaningful for `PinchZoom`
    pub scale_factor: f32,

    /// Pointer in normalized device coordinates; meaningful for `Point`
    pub pointer_position: Vec2,

    /// At least one hand was detected this frame
    pub hand_present: bool,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::absent()
    }
}

impl GestureState {
    /// No hand in frame
    pub fn absent() -> Self {
        Self::idle(false)
    }

    /// No gesture, with or without a visible hand
    pub fn idle(hand_present: bool) -> Self {
        Self {
            gesture: GestureType::None,
            rotation_delta: Vec2::ZERO,
            scale_factor: 1.0,
            pointer_position: Vec2::ZERO,
            hand_present,
        }
    }

    pub fn grip(rotation_delta: Vec2) -> Self {
        Self {
            gesture: GestureType::Grip,
            rotation_delta,
            ..Self::idle(true)
        }
    }

    pub fn pinch_zoom(scale_factor: f32) -> Self {
        Self {
            gesture: GestureType::PinchZoom,
            scale_factor,
            ..Self::idle(true)
        }
    }

    pub fn point(pointer_position: Vec2) -> Self {
        Self {
            gesture: GestureType::Point,
            pointer_position,
            ..Self::idle(true)
        }
    }

    /// Pointer position, only when pointing
    pub fn pointer(&self) -> Option<Vec2> {
        (self.gesture == GestureType::Point).then_some(self.pointer_position)
    }
}
