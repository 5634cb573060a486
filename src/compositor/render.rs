//! Frame compositing
//!
//! Turns the atlas layers plus world state into per-frame draw command
//! batches. Floor and ceiling are emitted whole every frame; walls are
//! emitted per the visibility table, rotated to the player's facing.
//!
//! Everything here is a pure function of its inputs. Nothing persists
//! between frames except the atlas itself.

use crate::atlas::{Atlas, DrawCommand, LayerKind};
use crate::world::{GameMap, GridPos, Player};
use super::tables::NORTH_VIEW;

/// Screen-space translation applied to every command in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOffset {
    pub x: i32,
    pub y: i32,
}

impl ViewOffset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Error type for compositing
///
/// Both variants mean the visibility table and the atlas content
/// disagree. That is a broken installation, so callers treat these as
/// fatal rather than skipping the fragment.
#[derive(Debug)]
pub enum CompositorError {
    MissingLayer(LayerKind),
    MissingFragment(&'static str),
}

impl std::fmt::Display for CompositorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompositorError::MissingLayer(kind) => {
                write!(f, "Atlas has no {} layer", kind)
            }
            CompositorError::MissingFragment(key) => {
                write!(f, "Walls layer has no \"{}\" fragment", key)
            }
        }
    }
}

/// The faux-3D view compositor
///
/// Owns the atlas; map, player, and offset are passed in per frame.
pub struct Compositor {
    atlas: Atlas,
}

impl Compositor {
    pub fn new(atlas: Atlas) -> Self {
        Self { atlas }
    }

    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// Emit every floor tile, translated by the view offset
    pub fn render_floor(&self, offset: ViewOffset) -> Result<Vec<DrawCommand>, CompositorError> {
        self.render_layer(LayerKind::Floor, offset)
    }

    /// Emit every ceiling tile, translated by the view offset
    pub fn render_ceiling(&self, offset: ViewOffset) -> Result<Vec<DrawCommand>, CompositorError> {
        self.render_layer(LayerKind::Ceiling, offset)
    }

    /// Full-layer pass - floor and ceiling have no visibility culling
    fn render_layer(
        &self,
        kind: LayerKind,
        offset: ViewOffset,
    ) -> Result<Vec<DrawCommand>, CompositorError> {
        let layer = self
            .atlas
            .layer(kind)
            .ok_or(CompositorError::MissingLayer(kind))?;

        let mut batch = Vec::with_capacity(layer.len());
        for fragment in layer.fragments() {
            let mut cmd = fragment.to_draw_command();
            cmd.translate(offset.x, offset.y);
            batch.push(cmd);
        }
        Ok(batch)
    }

    /// Emit the wall fragments visible from the player's cell and facing
    ///
    /// Walks the canonical table in order, rotating each probe offset
    /// into the player's frame. A solid probe emits its slot's
    /// fragment, shifted sideways by one fragment width per lane.
    pub fn render_walls(
        &self,
        offset: ViewOffset,
        map: &GameMap,
        player: &Player,
    ) -> Result<Vec<DrawCommand>, CompositorError> {
        let walls = self
            .atlas
            .layer(LayerKind::Walls)
            .ok_or(CompositorError::MissingLayer(LayerKind::Walls))?;

        let mut batch = Vec::new();
        for wall_slot in &NORTH_VIEW {
            let (dx, dz) = wall_slot.oriented_offset(player.facing);
            let probe = GridPos::new(player.x + dx, player.y + dz);
            if !map.is_wall(probe) {
                continue;
            }

            let fragment = walls
                .fragment(wall_slot.key)
                .ok_or(CompositorError::MissingFragment(wall_slot.key))?;

            let mut cmd = fragment.to_draw_command();
            let shift = cmd.w * wall_slot.lane + offset.x;
            cmd.translate(shift, offset.y);
            batch.push(cmd);
        }
        Ok(batch)
    }

    /// One whole frame: floor, then ceiling, then walls
    pub fn render_frame(
        &self,
        offset: ViewOffset,
        map: &GameMap,
        player: &Player,
    ) -> Result<Vec<DrawCommand>, CompositorError> {
        let mut batch = self.render_floor(offset)?;
        batch.extend(self.render_ceiling(offset)?);
        batch.extend(self.render_walls(offset, map, player)?);
        Ok(batch)
    }
}
