//! Canonical visibility table
//!
//! Every facing sees the same corridor: a front wall strip at depths
//! 1..3 and side walls flanking the nearer cells. The table below is
//! authored once, for North. The other three facings rotate each grid
//! offset a quarter turn per orientation step; fragment keys and lane
//! indices carry over unchanged because the atlas art is authored in
//! view space, not world space.

use crate::world::Orientation;

/// One visible wall slot
///
/// `dx`/`dz` are the probed grid offset in the North frame. `key`
/// names the wall fragment that fills the slot. `lane` tiles repeated
/// front fragments side by side (dest x moves by one fragment width
/// per lane); side fragments always sit in lane 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallSlot {
    pub dx: i32,
    pub dz: i32,
    pub key: &'static str,
    pub lane: i32,
}

const fn slot(dx: i32, dz: i32, key: &'static str, lane: i32) -> WallSlot {
    WallSlot { dx, dz, key, lane }
}

/// Wall slots for facing North, in emission order
///
/// The order is back-to-front by block but deliberately not depth
/// sorted within the frame; the atlas art is cut so overlapping slots
/// never show through each other.
pub const NORTH_VIEW: [WallSlot; 23] = [
    // front wall z=-3
    slot(-3, -3, "front_0_-3", -3),
    slot(-2, -3, "front_0_-3", -2),
    slot(-1, -3, "front_0_-3", -1),
    slot(0, -3, "front_0_-3", 0),
    slot(1, -3, "front_0_-3", 1),
    slot(2, -3, "front_0_-3", 2),
    slot(3, -3, "front_0_-3", 3),
    // left and right side walls z=-2
    slot(-2, -2, "side_-2_-2", 0),
    slot(-1, -2, "side_-1_-2", 0),
    slot(2, -2, "side_2_-2", 0),
    slot(1, -2, "side_1_-2", 0),
    // front wall z=-2
    slot(-2, -2, "front_0_-2", -2),
    slot(-1, -2, "front_0_-2", -1),
    slot(0, -2, "front_0_-2", 0),
    slot(1, -2, "front_0_-2", 1),
    slot(2, -2, "front_0_-2", 2),
    // left and right side walls z=-1
    slot(-1, -1, "side_-1_-1", 0),
    slot(1, -1, "side_1_-1", 0),
    // front wall z=-1
    slot(-1, -1, "front_0_-1", -1),
    slot(0, -1, "front_0_-1", 0),
    slot(1, -1, "front_0_-1", 1),
    // left and right side walls z=0
    slot(-1, 0, "side_-1_0", 0),
    slot(1, 0, "side_1_0", 0),
];

impl WallSlot {
    /// Grid offset of this slot in the given facing's frame
    pub fn oriented_offset(&self, facing: Orientation) -> (i32, i32) {
        facing.rotate_offset(self.dx, self.dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The hand-enumerated per-orientation tables the rotation replaces.
    // Each entry is (dx, dz, key, lane) exactly as a literal
    // per-facing implementation would spell it out.

    const EAST_LITERAL: [(i32, i32, &str, i32); 23] = [
        (3, -3, "front_0_-3", -3),
        (3, -2, "front_0_-3", -2),
        (3, -1, "front_0_-3", -1),
        (3, 0, "front_0_-3", 0),
        (3, 1, "front_0_-3", 1),
        (3, 2, "front_0_-3", 2),
        (3, 3, "front_0_-3", 3),
        (2, -2, "side_-2_-2", 0),
        (2, -1, "side_-1_-2", 0),
        (2, 2, "side_2_-2", 0),
        (2, 1, "side_1_-2", 0),
        (2, -2, "front_0_-2", -2),
        (2, -1, "front_0_-2", -1),
        (2, 0, "front_0_-2", 0),
        (2, 1, "front_0_-2", 1),
        (2, 2, "front_0_-2", 2),
        (1, -1, "side_-1_-1", 0),
        (1, 1, "side_1_-1", 0),
        (1, -1, "front_0_-1", -1),
        (1, 0, "front_0_-1", 0),
        (1, 1, "front_0_-1", 1),
        (0, -1, "side_-1_0", 0),
        (0, 1, "side_1_0", 0),
    ];

    const SOUTH_LITERAL: [(i32, i32, &str, i32); 23] = [
        (3, 3, "front_0_-3", -3),
        (2, 3, "front_0_-3", -2),
        (1, 3, "front_0_-3", -1),
        (0, 3, "front_0_-3", 0),
        (-1, 3, "front_0_-3", 1),
        (-2, 3, "front_0_-3", 2),
        (-3, 3, "front_0_-3", 3),
        (2, 2, "side_-2_-2", 0),
        (1, 2, "side_-1_-2", 0),
        (-2, 2, "side_2_-2", 0),
        (-1, 2, "side_1_-2", 0),
        (2, 2, "front_0_-2", -2),
        (1, 2, "front_0_-2", -1),
        (0, 2, "front_0_-2", 0),
        (-1, 2, "front_0_-2", 1),
        (-2, 2, "front_0_-2", 2),
        (1, 1, "side_-1_-1", 0),
        (-1, 1, "side_1_-1", 0),
        (1, 1, "front_0_-1", -1),
        (0, 1, "front_0_-1", 0),
        (-1, 1, "front_0_-1", 1),
        (1, 0, "side_-1_0", 0),
        (-1, 0, "side_1_0", 0),
    ];

    const WEST_LITERAL: [(i32, i32, &str, i32); 23] = [
        (-3, 3, "front_0_-3", -3),
        (-3, 2, "front_0_-3", -2),
        (-3, 1, "front_0_-3", -1),
        (-3, 0, "front_0_-3", 0),
        (-3, -1, "front_0_-3", 1),
        (-3, -2, "front_0_-3", 2),
        (-3, -3, "front_0_-3", 3),
        (-2, 2, "side_-2_-2", 0),
        (-2, 1, "side_-1_-2", 0),
        (-2, -2, "side_2_-2", 0),
        (-2, -1, "side_1_-2", 0),
        (-2, 2, "front_0_-2", -2),
        (-2, 1, "front_0_-2", -1),
        (-2, 0, "front_0_-2", 0),
        (-2, -1, "front_0_-2", 1),
        (-2, -2, "front_0_-2", 2),
        (-1, 1, "side_-1_-1", 0),
        (-1, -1, "side_1_-1", 0),
        (-1, 1, "front_0_-1", -1),
        (-1, 0, "front_0_-1", 0),
        (-1, -1, "front_0_-1", 1),
        (0, 1, "side_-1_0", 0),
        (0, -1, "side_1_0", 0),
    ];

    fn oriented(facing: Orientation) -> Vec<(i32, i32, &'static str, i32)> {
        NORTH_VIEW
            .iter()
            .map(|s| {
                let (dx, dz) = s.oriented_offset(facing);
                (dx, dz, s.key, s.lane)
            })
            .collect()
    }

    #[test]
    fn test_north_is_identity() {
        let rotated = oriented(Orientation::North);
        let literal: Vec<_> = NORTH_VIEW.iter().map(|s| (s.dx, s.dz, s.key, s.lane)).collect();
        assert_eq!(rotated, literal);
    }

    #[test]
    fn test_east_matches_literal_table() {
        assert_eq!(oriented(Orientation::East), EAST_LITERAL.to_vec());
    }

    #[test]
    fn test_south_matches_literal_table() {
        assert_eq!(oriented(Orientation::South), SOUTH_LITERAL.to_vec());
    }

    #[test]
    fn test_west_matches_literal_table() {
        assert_eq!(oriented(Orientation::West), WEST_LITERAL.to_vec());
    }

    #[test]
    fn test_every_key_has_a_slot_per_depth() {
        // 7 + 5 + 3 front slots, 8 side slots
        let fronts = NORTH_VIEW.iter().filter(|s| s.key.starts_with("front")).count();
        let sides = NORTH_VIEW.iter().filter(|s| s.key.starts_with("side")).count();
        assert_eq!(fronts, 15);
        assert_eq!(sides, 8);
    }
}
