//! GESTURA Test Harness - Synthetic input and pipeline validation
//!
//! This crate provides:
//! - Synthetic 21-point hands in scripted poses
//! - Landmark chaos (jitter, dropout, malformed frames)
//! - Scenario scripts and a runner that drives the full pipeline

pub mod chaos;
pub mod scenario;
pub mod simulator;

pub use chaos::*;
pub use scenario::*;
pub use simulator::*;
