//! Accumulator configuration

use gestura_core::{GesturaError, GesturaResult, Vec3};
use serde::{Deserialize, Serialize};

/// Smallest displayed scale
pub const DEFAULT_MIN_SCALE: f32 = 0.1;

/// Largest displayed scale
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Fraction of the remaining gap closed per reference frame
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.1;

/// Frame rate at which elapsed-time smoothing matches fixed-step smoothing
pub const DEFAULT_REFERENCE_FPS: f32 = 60.0;

/// Transform accumulator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulatorConfig {
    /// Lower scale bound
    pub min_scale: f32,
    /// Upper scale bound
    pub max_scale: f32,
    /// Per-frame smoothing factor in `(0, 1]`; 1 disables smoothing
    pub smoothing_factor: f32,
    /// Reference frame rate for elapsed-time smoothing
    pub reference_fps: f32,
    /// Axis for horizontal wrist motion (yaw)
    pub yaw_axis: Vec3,
    /// Axis for vertical wrist motion (pitch)
    pub pitch_axis: Vec3,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            reference_fps: DEFAULT_REFERENCE_FPS,
            yaw_axis: Vec3::UP,
            pitch_axis: Vec3::RIGHT,
        }
    }
}

impl AccumulatorConfig {
    /// Snappier tracking for high-confidence input
    pub fn responsive() -> Self {
        Self {
            smoothing_factor: 0.3,
            ..Self::default()
        }
    }

    /// No smoothing: the displayed transform jumps straight to the target
    pub fn unsmoothed() -> Self {
        Self {
            smoothing_factor: 1.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> GesturaResult<()> {
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(GesturaError::InvalidConfig(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if !(self.max_scale.is_finite() && self.max_scale >= self.min_scale) {
            return Err(GesturaError::InvalidConfig(format!(
                "max_scale {} must be at least min_scale {}",
                self.max_scale, self.min_scale
            )));
        }
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor <= 1.0) {
            return Err(GesturaError::InvalidConfig(format!(
                "smoothing_factor must be in (0, 1], got {}",
                self.smoothing_factor
            )));
        }
        if !(self.reference_fps.is_finite() && self.reference_fps > 0.0) {
            return Err(GesturaError::InvalidConfig(format!(
                "reference_fps must be positive, got {}",
                self.reference_fps
            )));
        }
        if self.yaw_axis.normalize() == Vec3::ZERO || self.pitch_axis.normalize() == Vec3::ZERO {
            return Err(GesturaError::InvalidConfig(
                "rotation axes must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Clamp a scale into the configured range.
    ///
    /// Total even for a configuration that fails `validate`: an inverted
    /// range resolves to `max_scale` and NaN bounds are skipped.
    #[inline]
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}
