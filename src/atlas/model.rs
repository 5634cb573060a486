//! Atlas model - sprite sheet metadata and fragment lookup
//!
//! Built once at startup from a JSON description, read-only afterwards.
//! The description stores atlas pixel coordinates top-down; everything
//! the compositor emits is bottom-up canvas space. Both Y flips happen
//! exactly once, at fragment construction and command bake time.

use std::collections::HashMap;
use serde::Deserialize;

/// Width of the fixed compositing canvas the fragment anchors are
/// authored against
pub const VIEW_WIDTH: i32 = 320;
/// Height of the fixed compositing canvas - also the bottom-up flip
/// height for fragment screen anchors
pub const VIEW_HEIGHT: i32 = 256;

/// The physical sprite sheet backing an atlas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasImage {
    pub path: String,
    pub width: i32,
    pub height: i32,
}

impl AtlasImage {
    pub fn new(path: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }
}

/// Rectangle in atlas-image pixel space, top-down Y as authored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// On-screen anchor for a fragment, in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScreenAnchor {
    pub x: i32,
    pub y: i32,
}

/// Grid cell a fragment was authored for, relative to the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GridRef {
    pub x: i32,
    pub z: i32,
}

/// One sprite blit: screen rect, atlas source rect, sheet path, flip
///
/// Pure single-frame output value. Y values are bottom-up; the blit
/// boundary converts to whatever the target API uses.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub source_x: i32,
    pub source_y: i32,
    pub source_w: i32,
    pub source_h: i32,
    pub path: String,
    pub flip_horizontally: bool,
}

impl DrawCommand {
    /// Translate in place by a screen offset
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}

/// One named rectangular region of the atlas plus its intended
/// on-screen placement
#[derive(Debug, Clone)]
pub struct SpriteFragment {
    pub kind: String,
    pub flipped: bool,
    pub tile: GridRef,
    pub screen: ScreenAnchor,
    pub coords: PixelRect,
    pub source_x: i32,
    pub source_y: i32,
    pub source_w: i32,
    pub source_h: i32,
    pub path: String,
}

impl SpriteFragment {
    /// Bind a tile description to its sheet
    ///
    /// The atlas stores source rects top-down; render space is
    /// bottom-up, so the source Y is flipped here, once.
    pub fn new(
        kind: String,
        flipped: bool,
        tile: GridRef,
        screen: ScreenAnchor,
        coords: PixelRect,
        image: &AtlasImage,
    ) -> Self {
        Self {
            kind,
            flipped,
            tile,
            screen,
            coords,
            source_x: coords.x,
            source_y: image.height - coords.y - coords.h,
            source_w: coords.w,
            source_h: coords.h,
            path: image.path.clone(),
        }
    }

    /// Composite key used for layer lookup, e.g. "front_0_-3"
    pub fn key(&self) -> String {
        format!("{}_{}_{}", self.kind, self.tile.x, self.tile.z)
    }

    /// Bake into a draw command; the caller applies any translation
    ///
    /// A flipped fragment shifts its anchor left by one source width so
    /// the mirrored art stays visually in place.
    pub fn to_draw_command(&self) -> DrawCommand {
        let mut x = self.screen.x;
        if self.flipped {
            x -= self.source_w;
        }

        DrawCommand {
            x,
            y: VIEW_HEIGHT - self.screen.y - self.coords.h,
            w: self.coords.w,
            h: self.coords.h,
            source_x: self.source_x,
            source_y: self.source_y,
            source_w: self.source_w,
            source_h: self.source_h,
            path: self.path.clone(),
            flip_horizontally: self.flipped,
        }
    }
}

/// The three visual roles an atlas layer can serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Floor,
    Ceiling,
    Walls,
}

impl LayerKind {
    pub const ALL: [LayerKind; 3] = [LayerKind::Floor, LayerKind::Ceiling, LayerKind::Walls];

    pub fn from_name(name: &str) -> Option<LayerKind> {
        match name {
            "Floor" => Some(LayerKind::Floor),
            "Ceiling" => Some(LayerKind::Ceiling),
            "Walls" => Some(LayerKind::Walls),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Floor => "Floor",
            LayerKind::Ceiling => "Ceiling",
            LayerKind::Walls => "Walls",
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named group of fragments serving one visual role
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    pub index: i32,
    pub enabled: bool,
    tiles: HashMap<String, SpriteFragment>,
}

impl Layer {
    pub fn new(name: String, index: i32, enabled: bool) -> Self {
        Self {
            name,
            index,
            enabled,
            tiles: HashMap::new(),
        }
    }

    /// Store a fragment under its composite key
    ///
    /// Keys are unique within a layer; a duplicate replaces the
    /// earlier fragment.
    pub fn insert(&mut self, fragment: SpriteFragment) {
        self.tiles.insert(fragment.key(), fragment);
    }

    pub fn fragment(&self, key: &str) -> Option<&SpriteFragment> {
        self.tiles.get(key)
    }

    pub fn fragments(&self) -> impl Iterator<Item = &SpriteFragment> {
        self.tiles.values()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// A sprite sheet plus its structured metadata
///
/// Owns every layer and fragment; nothing aliases into it.
#[derive(Debug, Clone)]
pub struct Atlas {
    pub version: String,
    pub generated: String,
    pub resolution: i32,
    pub depth: i32,
    pub width: i32,
    layers: HashMap<LayerKind, Layer>,
    pub image: AtlasImage,
}

impl Atlas {
    pub fn new(
        version: String,
        generated: String,
        resolution: i32,
        depth: i32,
        width: i32,
        layers: HashMap<LayerKind, Layer>,
        image: AtlasImage,
    ) -> Self {
        Self {
            version,
            generated,
            resolution,
            depth,
            width,
            layers,
            image,
        }
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.get(&kind)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
