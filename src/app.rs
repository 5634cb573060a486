//! Game session state and input handling
//!
//! One explicit state struct per run - no ambient globals. Input is
//! polled once per frame and mutates the player before the compositor
//! reads anything.

use macroquad::prelude::*;
use crate::atlas::Atlas;
use crate::compositor::{Compositor, ViewOffset};
use crate::world::{GameMap, Level, Player};

/// Where the 320x256 corridor view sits on the 1280x720 screen
pub const VIEW_OFFSET_X: i32 = 480;
pub const VIEW_OFFSET_Y: i32 = 232;

/// Session state for one run
pub struct GameState {
    pub compositor: Compositor,
    pub map: GameMap,
    pub player: Player,
    pub view_offset: ViewOffset,
    pub level_name: String,
}

impl GameState {
    pub fn new(atlas: Atlas, level: Level) -> Self {
        Self {
            compositor: Compositor::new(atlas),
            player: level.spawn.player(),
            map: level.map,
            view_offset: ViewOffset::new(VIEW_OFFSET_X, VIEW_OFFSET_Y),
            level_name: level.name,
        }
    }

    /// Poll the keyboard and update the player
    ///
    /// Q/E turn in place; WASD moves relative to the current facing,
    /// with walls and map bounds blocking the step.
    pub fn process_input(&mut self) {
        if is_key_pressed(KeyCode::Q) {
            self.player.turn_left();
        }
        if is_key_pressed(KeyCode::E) {
            self.player.turn_right();
        }

        let forward = self.player.facing.forward();
        let left = self.player.facing.left();

        if is_key_pressed(KeyCode::W) {
            self.player.try_step(&self.map, forward.0, forward.1);
        }
        if is_key_pressed(KeyCode::S) {
            self.player.try_step(&self.map, -forward.0, -forward.1);
        }
        if is_key_pressed(KeyCode::A) {
            self.player.try_step(&self.map, left.0, left.1);
        }
        if is_key_pressed(KeyCode::D) {
            self.player.try_step(&self.map, -left.0, -left.1);
        }
    }
}
