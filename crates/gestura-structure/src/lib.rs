//! GESTURA Structure - What the gestures manipulate
//!
//! The gesture pipeline is agnostic to molecule content. This crate supplies
//! the structure data the renderer and the selection resolver need:
//! - Atoms and the structure's geometric center
//! - Element radii and CPK colors
//! - A reader for PDB `ATOM`/`HETATM` records

pub mod atom;
pub mod element;
pub mod pdb;

pub use atom::*;
pub use element::*;
pub use pdb::*;
