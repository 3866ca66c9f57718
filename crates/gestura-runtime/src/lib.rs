//! GESTURA Runtime - Landmarks in, object transform out
//!
//! Each detector frame runs two stages in strict sequence:
//! 1. Classify landmarks into a gesture state (latched as a level signal)
//! 2. Accumulate the latched state into the displayed transform
//!
//! Render frames may outnumber detector frames; every render tick re-reads
//! the latest latched state. When detection runs on its own thread, the
//! [`GestureLatch`] carries the newest state across.

pub mod config;
pub mod latch;
pub mod pipeline;
pub mod stats;
pub mod telemetry;

pub use config::*;
pub use latch::*;
pub use pipeline::*;
pub use stats::*;
