//! Pipeline configuration
//!
//! Aggregates classifier and accumulator settings. Files are JSON; every
//! field is optional and falls back to its default.

use std::path::Path;

use gestura_classify::ClassifierConfig;
use gestura_core::{GesturaError, GesturaResult};
use gestura_transform::AccumulatorConfig;
use serde::{Deserialize, Serialize};

/// How render ticks advance smoothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmoothingMode {
    /// Constant fraction per tick, regardless of elapsed time
    #[default]
    FixedStep,
    /// Fraction derived from the time since the previous tick
    Elapsed,
}

/// Full pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub classifier: ClassifierConfig,
    pub accumulator: AccumulatorConfig,
    pub smoothing: SmoothingMode,
}

impl PipelineConfig {
    /// Frame-rate independent smoothing with default thresholds
    pub fn elapsed() -> Self {
        Self {
            smoothing: SmoothingMode::Elapsed,
            ..Self::default()
        }
    }

    /// Tuned for a user far from the camera, with snappier tracking
    pub fn far_from_camera() -> Self {
        Self {
            classifier: ClassifierConfig::far_from_camera(),
            accumulator: AccumulatorConfig::responsive(),
            smoothing: SmoothingMode::Elapsed,
        }
    }

    pub fn validate(&self) -> GesturaResult<()> {
        self.classifier.validate()?;
        self.accumulator.validate()
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> GesturaResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GesturaError::ConfigFormat(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> GesturaResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> GesturaResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GesturaError::ConfigFormat(e.to_string()))
    }
}
