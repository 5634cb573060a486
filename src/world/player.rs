//! Player state and discrete facing
//!
//! The player occupies one grid cell and faces one of four cardinal
//! directions. All movement is cell-by-cell; all turning is in 90
//! degree steps.

use serde::{Serialize, Deserialize};
use super::map::{GameMap, GridPos};

/// The four discrete facings, clockwise from North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Build from an integer, taken mod 4 (negative values wrap)
    pub fn from_index(i: i32) -> Orientation {
        match i.rem_euclid(4) {
            0 => Orientation::North,
            1 => Orientation::East,
            2 => Orientation::South,
            _ => Orientation::West,
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// 90 degrees counterclockwise
    pub fn turned_left(self) -> Orientation {
        Orientation::from_index(self.index() - 1)
    }

    /// 90 degrees clockwise
    pub fn turned_right(self) -> Orientation {
        Orientation::from_index(self.index() + 1)
    }

    /// One grid step straight ahead
    pub fn forward(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, -1),
            Orientation::East => (1, 0),
            Orientation::South => (0, 1),
            Orientation::West => (-1, 0),
        }
    }

    /// One grid step to the player's left
    pub fn left(self) -> (i32, i32) {
        match self {
            Orientation::North => (-1, 0),
            Orientation::East => (0, -1),
            Orientation::South => (1, 0),
            Orientation::West => (0, 1),
        }
    }

    /// Rotate a North-frame grid offset into this facing's frame
    ///
    /// One quarter turn per orientation step: (x, z) -> (-z, x).
    /// North is the identity.
    pub fn rotate_offset(self, x: i32, z: i32) -> (i32, i32) {
        let mut p = (x, z);
        for _ in 0..self.index() {
            p = (-p.1, p.0);
        }
        p
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::North => "North",
            Orientation::East => "East",
            Orientation::South => "South",
            Orientation::West => "West",
        }
    }

    /// Minimap arrow glyph
    pub fn arrow(self) -> char {
        match self {
            Orientation::North => '^',
            Orientation::East => '>',
            Orientation::South => 'v',
            Orientation::West => '<',
        }
    }
}

/// The player: grid cell plus facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub facing: Orientation,
}

impl Player {
    pub fn new(x: i32, y: i32, facing: Orientation) -> Self {
        Self { x, y, facing }
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }

    pub fn turn_left(&mut self) {
        self.facing = self.facing.turned_left();
    }

    pub fn turn_right(&mut self) {
        self.facing = self.facing.turned_right();
    }

    /// Step by (dx, dy) if the target cell is walkable
    ///
    /// Returns true when the player moved. Map bounds and walls both
    /// block movement.
    pub fn try_step(&mut self, map: &GameMap, dx: i32, dy: i32) -> bool {
        let target = GridPos::new(self.x + dx, self.y + dy);
        if map.is_open(target) {
            self.x = target.x;
            self.y = target.y;
            true
        } else {
            false
        }
    }
}
