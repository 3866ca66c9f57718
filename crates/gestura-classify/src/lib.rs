//! GESTURA Classifier - Per-frame gesture classification
//!
//! This crate implements the gesture decision procedure:
//! - Finger pose from wrist-to-fingertip distances
//! - Grip / point / two-hand zoom classification
//! - Incremental rotation, zoom and pointer signals
//!
//! All cross-frame memory lives in an explicit [`ClassifierHistory`] value,
//! so [`classify`] is a pure function of `(frame, history, config)`.

pub mod classifier;
pub mod config;
pub mod pose;

pub use classifier::*;
pub use config::*;
pub use pose::*;
