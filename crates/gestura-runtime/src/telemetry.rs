//! Log output for binaries
//!
//! Libraries only emit `tracing` events. A binary calls [`init`] once at
//! startup to install a subscriber. `RUST_LOG` overrides the default filter.

use gestura_core::{GesturaError, GesturaResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Environment variable selecting JSON output when set to `json`
pub const LOG_FORMAT_ENV: &str = "GESTURA_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            default_filter: "info".into(),
        }
    }
}

impl TelemetryConfig {
    /// Defaults, with the format taken from `GESTURA_LOG_FORMAT`
    pub fn from_env() -> Self {
        let format = match std::env::var(LOG_FORMAT_ENV) {
            Ok(value) => parse_format(&value),
            Err(_) => LogFormat::Text,
        };
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}

fn parse_format(value: &str) -> LogFormat {
    if value.trim().eq_ignore_ascii_case("json") {
        LogFormat::Json
    } else {
        LogFormat::Text
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &TelemetryConfig) -> GesturaResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))
        .map_err(|e| GesturaError::Telemetry(e.to_string()))?;

    let result = match config.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init(),
    };
    result.map_err(|e| GesturaError::Telemetry(e.to_string()))
}
