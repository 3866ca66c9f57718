//! Transform accumulator - persistent orientation and scale
//!
//! Each gesture state nudges a *target* transform immediately. The *current*
//! transform, the one actually rendered, chases the target every frame, so
//! the display never snaps even though deltas arrive as discrete jumps.

use std::time::Duration;

use gestura_core::{GesturaResult, GestureState, GestureType, Quat, Vec3};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::{lerp, AccumulatorConfig, SmoothingStep};

/// Orientation and uniform scale applied to the displayed object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectTransform {
    pub orientation: Quat,
    pub scale: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl ObjectTransform {
    pub fn new(orientation: Quat, scale: f32) -> Self {
        Self { orientation, scale }
    }

    /// Object-local point to world space
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.orientation.rotate(local * self.scale)
    }

    /// World point back to object-local space
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        if self.scale.abs() < f32::EPSILON {
            return Vec3::ZERO;
        }
        self.orientation.conjugate().rotate(world) * (1.0 / self.scale)
    }
}

/// Accumulates gesture deltas into a smoothed object transform
#[derive(Debug, Clone)]
pub struct TransformAccumulator {
    config: AccumulatorConfig,
    target: ObjectTransform,
    current: ObjectTransform,
    ticks: u64,
}

impl Default for TransformAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformAccumulator {
    /// Create an accumulator with default bounds and smoothing
    pub fn new() -> Self {
        Self::from_validated(AccumulatorConfig::default())
    }

    /// Create an accumulator with custom bounds and smoothing
    pub fn with_config(config: AccumulatorConfig) -> GesturaResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: AccumulatorConfig) -> Self {
        Self {
            config,
            target: ObjectTransform::default(),
            current: ObjectTransform::default(),
            ticks: 0,
        }
    }

    /// Apply a gesture and advance one fixed smoothing step
    pub fn update(&mut self, state: &GestureState) -> ObjectTransform {
        self.update_with(state, SmoothingStep::Frame)
    }

    /// Apply a gesture and advance smoothing by the elapsed time
    pub fn update_elapsed(&mut self, state: &GestureState, dt: Duration) -> ObjectTransform {
        self.update_with(state, SmoothingStep::Elapsed(dt))
    }

    /// Apply a gesture, then smooth by the given step
    pub fn update_with(&mut self, state: &GestureState, step: SmoothingStep) -> ObjectTransform {
        self.apply_gesture(state);
        self.smooth(step)
    }

    /// Nudge the target transform by one gesture state.
    ///
    /// Only `Grip` and `PinchZoom` change the target. Non-finite signals are
    /// ignored.
    pub fn apply_gesture(&mut self, state: &GestureState) {
        match state.gesture {
            GestureType::Grip => self.rotate_target(state),
            GestureType::PinchZoom => self.zoom_target(state.scale_factor),
            GestureType::None | GestureType::Point => {}
        }
    }

    fn rotate_target(&mut self, state: &GestureState) {
        let delta = state.rotation_delta;
        if !delta.is_finite() {
            warn!("Ignoring non-finite rotation delta {:?}", delta);
            return;
        }

        let yaw = Quat::from_axis_angle(self.config.yaw_axis, delta.x);
        let pitch = Quat::from_axis_angle(self.config.pitch_axis, delta.y);

        // Left-multiply: the increments apply after everything so far
        self.target.orientation = (pitch * (yaw * self.target.orientation)).normalize();
    }

    fn zoom_target(&mut self, factor: f32) {
        if !(factor.is_finite() && factor > 0.0) {
            warn!("Ignoring invalid scale factor {}", factor);
            return;
        }
        self.target.scale = self.config.clamp_scale(self.target.scale * factor);
    }

    /// Move the displayed transform toward the target.
    ///
    /// Scale is clamped on every call, not only when a zoom crosses a bound.
    pub fn smooth(&mut self, step: SmoothingStep) -> ObjectTransform {
        let alpha = step.alpha(&self.config);

        self.target.scale = self.config.clamp_scale(self.target.scale);

        self.current.orientation = self.current.orientation.slerp(&self.target.orientation, alpha);
        self.current.scale = self
            .config
            .clamp_scale(lerp(self.current.scale, self.target.scale, alpha));

        self.ticks += 1;
        trace!(
            alpha,
            scale = self.current.scale,
            target_scale = self.target.scale,
            "transform tick"
        );

        self.current
    }

    /// Currently displayed (smoothed) transform
    pub fn snapshot(&self) -> ObjectTransform {
        self.current
    }

    /// Gesture-driven target transform
    pub fn target(&self) -> ObjectTransform {
        self.target
    }

    /// Override the target scale; bounds are enforced on the next tick
    pub fn set_target_scale(&mut self, scale: f32) {
        if !scale.is_finite() {
            warn!("Ignoring non-finite target scale {}", scale);
            return;
        }
        self.target.scale = scale;
    }

    /// Override the target orientation
    pub fn set_target_orientation(&mut self, orientation: Quat) {
        self.target.orientation = orientation.normalize();
    }

    /// Swap configuration; the new scale bounds apply from the next tick.
    /// An invalid configuration is rejected and the current one kept.
    pub fn set_config(&mut self, config: AccumulatorConfig) -> GesturaResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &AccumulatorConfig {
        &self.config
    }

    /// Return to identity orientation and unit scale, and restart the tick
    /// count
    pub fn reset(&mut self) {
        self.target = ObjectTransform::default();
        self.current = ObjectTransform::default();
        self.ticks = 0;
    }

    /// Smoothing steps taken since creation or the last reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
