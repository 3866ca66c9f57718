//! Error types for GESTURA

use thiserror::Error;

/// Core GESTURA errors
///
/// None of these are raised while processing frames. Degenerate frames
/// degrade to an idle gesture instead; errors only surface at construction
/// time (validation, parsing, configuration loading).
#[derive(Error, Debug)]
pub enum GesturaError {
    // Landmark errors
    #[error("Landmark count mismatch: expected {expected}, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("Non-finite landmark at index {0}")]
    NonFiniteLandmark(usize),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Configuration format error: {0}")]
    ConfigFormat(String),

    #[error("Telemetry initialization failed: {0}")]
    Telemetry(String),

    // Structure errors
    #[error("Malformed PDB record at line {line}: {reason}")]
    PdbRecord { line: usize, reason: String },
}

/// Result type for GESTURA operations
pub type GesturaResult<T> = Result<T, GesturaError>;
