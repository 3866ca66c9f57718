//! GESTURA Select - Point to inspect
//!
//! A `Point` gesture yields a pointer in normalized device coordinates. The
//! renderer casts a ray from the camera through that pointer and reports the
//! nearest atom it hits, in the object's local (centered) frame.
//!
//! Hit-testing belongs to the renderer; this crate fixes the contract
//! ([`SelectionResolver`]) and provides a reference sphere picker.

pub mod camera;
pub mod picker;
pub mod resolver;

pub use camera::*;
pub use picker::*;
pub use resolver::*;
