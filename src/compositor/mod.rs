//! Compositor module - faux-3D corridor view
//!
//! No raycasting: a fixed visibility table names which wall fragments
//! a facing can see, and the compositor stamps pre-rendered atlas
//! fragments into a draw command batch. One canonical North table
//! serves all four facings via quarter-turn rotation.

mod tables;
mod render;

pub use tables::*;
pub use render::*;
