//! Exponential smoothing toward a target
//!
//! Fixed-step smoothing closes a constant fraction of the gap every frame,
//! so perceived speed depends on the display rate. Elapsed-time smoothing
//! scales the fraction by the time actually elapsed:
//!
//! `alpha = 1 - (1 - base)^(dt * reference_fps)`
//!
//! At exactly one reference frame this equals the fixed-step factor.

use std::time::Duration;

use crate::AccumulatorConfig;

/// How far one render tick advances the displayed transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothingStep {
    /// One fixed step of `smoothing_factor`
    Frame,
    /// Time-based step for the given elapsed duration
    Elapsed(Duration),
}

impl SmoothingStep {
    /// Interpolation factor in `[0, 1]` for this step
    pub fn alpha(&self, config: &AccumulatorConfig) -> f32 {
        match self {
            SmoothingStep::Frame => config.smoothing_factor.clamp(0.0, 1.0),
            SmoothingStep::Elapsed(dt) => {
                elapsed_alpha(config.smoothing_factor, *dt, config.reference_fps)
            }
        }
    }
}

/// Frame-rate independent smoothing factor
pub fn elapsed_alpha(base: f32, dt: Duration, reference_fps: f32) -> f32 {
    let base = base.clamp(0.0, 1.0);
    if base >= 1.0 {
        return 1.0;
    }
    let frames = dt.as_secs_f32() * reference_fps;
    if frames <= 0.0 {
        return 0.0;
    }
    (1.0 - (1.0 - base).powf(frames)).clamp(0.0, 1.0)
}

/// Scalar linear interpolation
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
