//! GESTURA Core - Fundamental types and primitives
//!
//! This crate defines the types shared by every stage of the gesture pipeline:
//! - Landmark frames (the per-frame detector contract)
//! - Gesture state (the classifier's per-frame output)
//! - Vector and quaternion math
//! - Frame time
//! - Error types

pub mod error;
pub mod gesture;
pub mod landmark;
pub mod math;
pub mod time;

pub use error::*;
pub use gesture::*;
pub use landmark::*;
pub use math::*;
pub use time::*;
