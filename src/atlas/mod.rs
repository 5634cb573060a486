//! Atlas module - sprite sheet metadata
//!
//! One JSON description plus one sheet image become an immutable
//! Atlas: named layers (Floor, Ceiling, Walls) holding fragments
//! keyed by "{type}_{x}_{z}". Built once at startup, shared read-only
//! with the compositor for the rest of the run.

mod model;
mod loader;

pub use model::*;
pub use loader::*;
