//! Level loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable level files.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use super::map::GameMap;
use super::player::{Orientation, Player};

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    BadMap(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl From<ron::Error> for LevelError {
    fn from(e: ron::Error) -> Self {
        LevelError::SerializeError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            LevelError::BadMap(e) => write!(f, "Bad map: {}", e),
        }
    }
}

/// Player spawn cell and facing
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spawn {
    pub x: i32,
    pub y: i32,
    pub facing: Orientation,
}

impl Spawn {
    pub fn player(&self) -> Player {
        Player::new(self.x, self.y, self.facing)
    }
}

/// A playable level: the tile map plus the player spawn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub map: GameMap,
    pub spawn: Spawn,
}

/// Load a level from a RON file
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
    let contents = fs::read_to_string(path)?;
    load_level_from_str(&contents)
}

/// Save a level to a RON file
pub fn save_level<P: AsRef<Path>>(level: &Level, path: P) -> Result<(), LevelError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(level, config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load a level from a RON string (for embedded levels or testing)
pub fn load_level_from_str(s: &str) -> Result<Level, LevelError> {
    let level: Level = ron::from_str(s)?;

    // Map shape is not enforced by serde; check it after parsing
    level.map.validate().map_err(LevelError::BadMap)?;

    Ok(level)
}

/// Built-in level used when no level file is present
pub fn create_default_level() -> Level {
    let rows = [
        "############",
        "#...#..#####",
        "#...##.#####",
        "#...##.#####",
        "#.........##",
        "#...#####.##",
        "#####.....##",
        "############",
    ];

    Level {
        name: "Fog Keep".to_string(),
        map: GameMap::new(rows.iter().map(|r| r.to_string()).collect())
            .expect("built-in map is well formed"),
        spawn: Spawn {
            x: 2,
            y: 1,
            facing: Orientation::West,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::map::GridPos;

    #[test]
    fn test_default_level_shape() {
        let level = create_default_level();
        assert_eq!(level.map.height(), 8);
        assert_eq!(level.map.width(), 12);
        // Spawn cell is walkable
        assert!(level.map.is_open(GridPos::new(level.spawn.x, level.spawn.y)));
        assert_eq!(level.spawn.facing, Orientation::West);
    }

    #[test]
    fn test_level_round_trip() {
        let level = create_default_level();
        let path = std::env::temp_dir().join("fog_engine_level_round_trip.ron");

        save_level(&level, &path).unwrap();
        let reloaded = load_level(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(reloaded.name, level.name);
        assert_eq!(reloaded.map.rows(), level.map.rows());
        assert_eq!(reloaded.spawn.x, level.spawn.x);
        assert_eq!(reloaded.spawn.y, level.spawn.y);
        assert_eq!(reloaded.spawn.facing, level.spawn.facing);
    }

    #[test]
    fn test_shipped_level_file_parses() {
        let text = include_str!("../../assets/levels/fog_keep.ron");
        let level = load_level_from_str(text).unwrap();
        assert_eq!(level.map.rows(), create_default_level().map.rows());
    }

    #[test]
    fn test_ragged_map_rejected() {
        let text = r#####"(
            name: "broken",
            map: (rows: ["####", "##"]),
            spawn: (x: 1, y: 1, facing: North),
        )"#####;
        match load_level_from_str(text) {
            Err(LevelError::BadMap(_)) => {}
            other => panic!("expected BadMap error, got {:?}", other.map(|_| ())),
        }
    }
}
