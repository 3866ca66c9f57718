//! Classifier configuration
//!
//! Thresholds are raw distances in normalized image space. Hand size and
//! camera distance are unknown, so nothing is calibrated; tune these instead.

use gestura_core::{GesturaError, GesturaResult};
use serde::{Deserialize, Serialize};

/// Wrist-to-tip distance above which a finger counts as extended
pub const DEFAULT_EXTENSION_THRESHOLD: f32 = 0.25;

/// Wrist-to-tip distance below which a finger counts as curled
pub const DEFAULT_CURL_THRESHOLD: f32 = 0.2;

/// Rotation per unit of wrist displacement while gripping
pub const DEFAULT_ROTATION_SENSITIVITY: f32 = 3.0;

/// Zoom per unit of inter-wrist distance change
pub const DEFAULT_ZOOM_SENSITIVITY: f32 = 1.5;

/// Extended/curled cutoffs for one finger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerThresholds {
    /// Distance strictly above this is "extended"
    pub extended: f32,
    /// Distance strictly below this is "curled"
    pub curled: f32,
}

impl Default for FingerThresholds {
    fn default() -> Self {
        Self {
            extended: DEFAULT_EXTENSION_THRESHOLD,
            curled: DEFAULT_CURL_THRESHOLD,
        }
    }
}

impl FingerThresholds {
    pub fn new(extended: f32, curled: f32) -> Self {
        Self { extended, curled }
    }

    fn validate(&self, finger: &str) -> GesturaResult<()> {
        if !(self.extended.is_finite() && self.extended > 0.0) {
            return Err(GesturaError::InvalidConfig(format!(
                "{finger}: extension threshold must be positive, got {}",
                self.extended
            )));
        }
        if !(self.curled.is_finite() && self.curled > 0.0) {
            return Err(GesturaError::InvalidConfig(format!(
                "{finger}: curl threshold must be positive, got {}",
                self.curled
            )));
        }
        if self.curled > self.extended {
            return Err(GesturaError::InvalidConfig(format!(
                "{finger}: curl threshold {} exceeds extension threshold {}",
                self.curled, self.extended
            )));
        }
        Ok(())
    }
}

/// Gesture classifier configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Rotation sensitivity `S`
    pub rotation_sensitivity: f32,
    /// Zoom sensitivity `K`
    pub zoom_sensitivity: f32,
    /// Index finger cutoffs
    pub index: FingerThresholds,
    /// Middle finger cutoffs
    pub middle: FingerThresholds,
    /// Ring finger cutoffs
    pub ring: FingerThresholds,
    /// Pinky cutoffs
    pub pinky: FingerThresholds,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rotation_sensitivity: DEFAULT_ROTATION_SENSITIVITY,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            index: FingerThresholds::default(),
            middle: FingerThresholds::default(),
            ring: FingerThresholds::default(),
            pinky: FingerThresholds::default(),
        }
    }
}

impl ClassifierConfig {
    /// Configuration for a user sitting far from the camera.
    /// Hands appear smaller, so every cutoff shrinks.
    pub fn far_from_camera() -> Self {
        let thresholds = FingerThresholds::new(0.15, 0.12);
        Self {
            rotation_sensitivity: 4.5,
            zoom_sensitivity: 2.5,
            index: thresholds,
            middle: thresholds,
            ring: thresholds,
            pinky: thresholds,
        }
    }

    /// Same cutoffs for all four fingers
    pub fn with_thresholds(mut self, thresholds: FingerThresholds) -> Self {
        self.index = thresholds;
        self.middle = thresholds;
        self.ring = thresholds;
        self.pinky = thresholds;
        self
    }

    pub fn with_sensitivity(mut self, rotation: f32, zoom: f32) -> Self {
        self.rotation_sensitivity = rotation;
        self.zoom_sensitivity = zoom;
        self
    }

    /// Reject values that would make classification meaningless
    pub fn validate(&self) -> GesturaResult<()> {
        if !self.rotation_sensitivity.is_finite() {
            return Err(GesturaError::InvalidConfig(
                "rotation sensitivity must be finite".into(),
            ));
        }
        if !self.zoom_sensitivity.is_finite() {
            return Err(GesturaError::InvalidConfig(
                "zoom sensitivity must be finite".into(),
            ));
        }
        self.index.validate("index")?;
        self.middle.validate("middle")?;
        self.ring.validate("ring")?;
        self.pinky.validate("pinky")?;
        Ok(())
    }
}
