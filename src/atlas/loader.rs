//! Atlas description loading
//!
//! The atlas is authored as a JSON document sitting next to its sprite
//! sheet. The document shape mirrors the authoring tool's export:
//! top-level metadata plus a list of layers, each carrying its tiles
//! with grid reference, screen anchor, and sheet coordinates.
//!
//! Loading is a one-shot startup step. A malformed description is a
//! fatal configuration error, never something to paper over per frame.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use serde::Deserialize;
use super::model::{
    Atlas, AtlasImage, GridRef, Layer, LayerKind, PixelRect, ScreenAnchor, SpriteFragment,
};

/// Error type for atlas loading
#[derive(Debug)]
pub enum AtlasError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    ImageError(image::ImageError),
    UnknownLayerType(String),
}

impl From<std::io::Error> for AtlasError {
    fn from(e: std::io::Error) -> Self {
        AtlasError::IoError(e)
    }
}

impl From<serde_json::Error> for AtlasError {
    fn from(e: serde_json::Error) -> Self {
        AtlasError::ParseError(e)
    }
}

impl From<image::ImageError> for AtlasError {
    fn from(e: image::ImageError) -> Self {
        AtlasError::ImageError(e)
    }
}

impl std::fmt::Display for AtlasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtlasError::IoError(e) => write!(f, "IO error: {}", e),
            AtlasError::ParseError(e) => write!(f, "Parse error: {}", e),
            AtlasError::ImageError(e) => write!(f, "Image error: {}", e),
            AtlasError::UnknownLayerType(t) => write!(f, "Unknown layer type: {}", t),
        }
    }
}

/// Top-level description document
#[derive(Debug, Deserialize)]
struct AtlasDoc {
    version: String,
    generated: String,
    resolution: i32,
    depth: i32,
    width: i32,
    layers: Vec<LayerDoc>,
}

#[derive(Debug, Deserialize)]
struct LayerDoc {
    on: bool,
    index: i32,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[allow(dead_code)]
    id: i32,
    #[allow(dead_code)]
    scale: f32,
    #[allow(dead_code)]
    offset: OffsetDoc,
    tiles: Vec<TileDoc>,
}

/// Authoring-tool layer offset; present in the format, unused at runtime
#[derive(Debug, Deserialize)]
struct OffsetDoc {
    #[allow(dead_code)]
    x: i32,
    #[allow(dead_code)]
    y: i32,
}

#[derive(Debug, Deserialize)]
struct TileDoc {
    #[serde(rename = "type")]
    kind: String,
    flipped: bool,
    tile: GridRef,
    screen: ScreenAnchor,
    coords: PixelRect,
}

/// Read an atlas description file and build the atlas
pub fn load_atlas<P: AsRef<Path>>(path: P, image: AtlasImage) -> Result<Atlas, AtlasError> {
    let contents = fs::read_to_string(path)?;
    build_atlas(&contents, image)
}

/// Build an atlas from a JSON description string
///
/// Pure and deterministic. Fails on missing required fields and on
/// layer types outside Floor/Ceiling/Walls.
pub fn build_atlas(json: &str, image: AtlasImage) -> Result<Atlas, AtlasError> {
    let doc: AtlasDoc = serde_json::from_str(json)?;

    let mut layers = HashMap::new();
    for layer_doc in doc.layers {
        let kind = LayerKind::from_name(&layer_doc.kind)
            .ok_or_else(|| AtlasError::UnknownLayerType(layer_doc.kind.clone()))?;

        let mut layer = Layer::new(layer_doc.name, layer_doc.index, layer_doc.on);
        for tile in layer_doc.tiles {
            layer.insert(SpriteFragment::new(
                tile.kind,
                tile.flipped,
                tile.tile,
                tile.screen,
                tile.coords,
                &image,
            ));
        }
        layers.insert(kind, layer);
    }

    Ok(Atlas::new(
        doc.version,
        doc.generated,
        doc.resolution,
        doc.depth,
        doc.width,
        layers,
        image,
    ))
}

/// Read a sprite sheet's pixel dimensions without decoding the pixels
pub fn probe_atlas_image<P: AsRef<Path>>(path: P) -> Result<AtlasImage, AtlasError> {
    let (width, height) = image::image_dimensions(path.as_ref())?;
    Ok(AtlasImage::new(
        path.as_ref().to_string_lossy(),
        width as i32,
        height as i32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "version": "1.0",
        "generated": "2024-06-01T12:00:00Z",
        "resolution": 1,
        "depth": 8,
        "width": 320,
        "layers": [
            {
                "on": true,
                "index": 0,
                "name": "fog_floor",
                "type": "Floor",
                "id": 1,
                "scale": 1.0,
                "offset": { "x": 0, "y": 0 },
                "tiles": [
                    {
                        "type": "floor",
                        "flipped": false,
                        "tile": { "x": 0, "z": -1 },
                        "screen": { "x": 0, "y": 0 },
                        "coords": { "x": 0, "y": 40, "w": 50, "h": 10 }
                    }
                ]
            },
            {
                "on": true,
                "index": 2,
                "name": "fog_walls",
                "type": "Walls",
                "id": 3,
                "scale": 1.0,
                "offset": { "x": 0, "y": 0 },
                "tiles": [
                    {
                        "type": "front",
                        "flipped": false,
                        "tile": { "x": 0, "z": -1 },
                        "screen": { "x": 40, "y": 10 },
                        "coords": { "x": 0, "y": 0, "w": 10, "h": 20 }
                    },
                    {
                        "type": "side",
                        "flipped": true,
                        "tile": { "x": 1, "z": 0 },
                        "screen": { "x": 100, "y": 0 },
                        "coords": { "x": 10, "y": 0, "w": 12, "h": 30 }
                    }
                ]
            }
        ]
    }"#;

    fn image() -> AtlasImage {
        AtlasImage::new("sheet.png", 200, 100)
    }

    #[test]
    fn test_build_from_fixture() {
        let atlas = build_atlas(FIXTURE, image()).unwrap();
        assert_eq!(atlas.version, "1.0");
        assert_eq!(atlas.width, 320);
        assert_eq!(atlas.layer_count(), 2);

        let walls = atlas.layer(LayerKind::Walls).unwrap();
        assert_eq!(walls.len(), 2);
        assert!(walls.enabled);
        assert_eq!(walls.index, 2);

        let frag = walls.fragment("front_0_-1").unwrap();
        assert_eq!(frag.source_y, 100 - 0 - 20);
        assert_eq!(frag.path, "sheet.png");

        let side = walls.fragment("side_1_0").unwrap();
        assert!(side.flipped);

        assert!(atlas.layer(LayerKind::Ceiling).is_none());
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        // No "layers" key at all
        let json = r#"{ "version": "1.0", "generated": "", "resolution": 1, "depth": 8, "width": 320 }"#;
        match build_atlas(json, image()) {
            Err(AtlasError::ParseError(_)) => {}
            other => panic!("expected ParseError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_tile_field_is_parse_error() {
        let json = FIXTURE.replace("\"flipped\": false,", "");
        match build_atlas(&json, image()) {
            Err(AtlasError::ParseError(_)) => {}
            other => panic!("expected ParseError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unknown_layer_type_rejected() {
        let json = FIXTURE.replace("\"type\": \"Floor\"", "\"type\": \"Sky\"");
        match build_atlas(&json, image()) {
            Err(AtlasError::UnknownLayerType(t)) => assert_eq!(t, "Sky"),
            other => panic!("expected UnknownLayerType, got {:?}", other.map(|_| ())),
        }
    }
}
