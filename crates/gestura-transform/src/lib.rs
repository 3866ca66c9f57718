//! GESTURA Transform - Gesture deltas into a stable object transform
//!
//! Gesture states arrive as per-frame increments. This crate composes them
//! into a persistent target orientation and scale, and smooths the displayed
//! transform toward that target every render frame:
//! - Orientation by quaternion composition (no Euler accumulation)
//! - Scale clamped to a fixed range every frame
//! - Fixed-step or elapsed-time exponential smoothing

pub mod accumulator;
pub mod config;
pub mod smoothing;

pub use accumulator::*;
pub use config::*;
pub use smoothing::*;
