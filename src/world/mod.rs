//! World module - grid-based dungeon state
//!
//! Everything the compositor reads each frame:
//! - Tile maps with implicit solid boundaries
//! - Player cell position and discrete facing
//! - RON level files with map and spawn
//!
//! No rendering logic lives here.

mod map;
mod player;
mod level;

pub use map::*;
pub use player::*;
pub use level::*;
