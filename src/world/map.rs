//! Tile map for grid-based levels
//!
//! A map is an ordered list of equal-width rows, row 0 at the top.
//! Cells are single characters: '#' wall, '.' open floor. Everything
//! outside the map bounds counts as solid, so every level is
//! implicitly enclosed by walls.

use serde::{Serialize, Deserialize};

/// Wall cell marker
pub const WALL: char = '#';
/// Walkable cell marker
pub const EMPTY: char = '.';
/// Player spawn marker (informational only - live player state is separate)
pub const PLAYER: char = '@';

/// A position on the tile grid
///
/// Signed so visibility probes can step outside the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The tile map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    rows: Vec<String>,
}

impl GameMap {
    /// Build a map from rows, validating that every row has the same width
    pub fn new(rows: Vec<String>) -> Result<Self, String> {
        let map = Self { rows };
        map.validate()?;
        Ok(map)
    }

    /// Check map shape (call after deserializing - not enforced by serde)
    pub fn validate(&self) -> Result<(), String> {
        let first = match self.rows.first() {
            Some(row) => row,
            None => return Err("map has no rows".to_string()),
        };
        if first.is_empty() {
            return Err("map rows are empty".to_string());
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.chars().count() != first.chars().count() {
                return Err(format!(
                    "row {} is {} cells wide, expected {}",
                    i,
                    row.chars().count(),
                    first.chars().count()
                ));
            }
        }
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.rows.first().map(|r| r.len() as i32).unwrap_or(0)
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Cell at a position, or None when out of bounds
    pub fn cell(&self, pos: GridPos) -> Option<char> {
        if pos.y < 0 || pos.x < 0 {
            return None;
        }
        self.rows
            .get(pos.y as usize)
            .and_then(|row| row.as_bytes().get(pos.x as usize))
            .map(|&b| b as char)
    }

    /// Solid check for visibility probes
    ///
    /// Out-of-bounds positions are solid: the map edge always reads as
    /// a wall, no matter how far outside the probe lands.
    pub fn is_wall(&self, pos: GridPos) -> bool {
        match self.cell(pos) {
            Some(c) => c == WALL,
            None => true,
        }
    }

    /// Movement check - stricter than `is_wall`
    ///
    /// A cell is walkable only when it is in bounds and not a wall.
    pub fn is_open(&self, pos: GridPos) -> bool {
        match self.cell(pos) {
            Some(c) => c != WALL,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_map() -> GameMap {
        GameMap::new(vec![
            "####".to_string(),
            "#..#".to_string(),
            "#.##".to_string(),
            "####".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn test_in_bounds_cells() {
        let map = small_map();
        assert!(map.is_wall(GridPos::new(0, 0)));
        assert!(!map.is_wall(GridPos::new(1, 1)));
        assert!(!map.is_wall(GridPos::new(2, 1)));
        assert!(map.is_wall(GridPos::new(2, 2)));
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let map = small_map();
        assert!(map.is_wall(GridPos::new(-1, 1)));
        assert!(map.is_wall(GridPos::new(4, 1)));
        assert!(map.is_wall(GridPos::new(1, -1)));
        assert!(map.is_wall(GridPos::new(1, 4)));
        assert!(map.is_wall(GridPos::new(-100, -100)));
    }

    #[test]
    fn test_out_of_bounds_not_open() {
        let map = small_map();
        assert!(!map.is_open(GridPos::new(-1, 1)));
        assert!(!map.is_open(GridPos::new(1, 4)));
        assert!(map.is_open(GridPos::new(1, 1)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = GameMap::new(vec!["####".to_string(), "##".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_map_rejected() {
        assert!(GameMap::new(Vec::new()).is_err());
    }
}
