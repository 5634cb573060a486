//! Fog Engine: grid-based faux-3D dungeon crawler
//!
//! First-person corridor rendering without a raycaster:
//! - Pre-rendered sprite fragments composited per visible grid cell
//! - One canonical visibility table rotated to the player's facing
//! - Cell-by-cell movement on an ASCII tile map

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod atlas;
mod compositor;
mod world;

use macroquad::prelude::*;
use app::GameState;
use atlas::{load_atlas, probe_atlas_image, DrawCommand, VIEW_HEIGHT, VIEW_WIDTH};
use world::{create_default_level, load_level};

const ATLAS_JSON_PATH: &str = "assets/atlas_fog.json";
const ATLAS_IMAGE_PATH: &str = "assets/sprites/untitled_fog.png";
const LEVEL_PATH: &str = "assets/levels/fog_keep.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Fog Engine v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Sheet dimensions first - fragment source rects are flipped
    // against the image height at build time
    let atlas_image = match probe_atlas_image(ATLAS_IMAGE_PATH) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Failed to read atlas sheet {}: {}", ATLAS_IMAGE_PATH, e);
            std::process::exit(1);
        }
    };

    let atlas = match load_atlas(ATLAS_JSON_PATH, atlas_image) {
        Ok(atlas) => {
            println!(
                "Loaded atlas v{} ({} layers, sheet {}x{})",
                atlas.version,
                atlas.layer_count(),
                atlas.image.width,
                atlas.image.height
            );
            atlas
        }
        Err(e) => {
            eprintln!("Failed to load atlas {}: {}", ATLAS_JSON_PATH, e);
            std::process::exit(1);
        }
    };

    // Level file if present, built-in level otherwise
    let level = match load_level(LEVEL_PATH) {
        Ok(level) => level,
        Err(e) => {
            println!("No level at {} ({}), using built-in", LEVEL_PATH, e);
            create_default_level()
        }
    };
    println!("Level: {}", level.name);

    // The sheet texture the draw commands blit from
    let sheet = match load_texture(ATLAS_IMAGE_PATH).await {
        Ok(tex) => tex,
        Err(e) => {
            eprintln!("Failed to load texture {}: {}", ATLAS_IMAGE_PATH, e);
            std::process::exit(1);
        }
    };
    sheet.set_filter(FilterMode::Nearest);

    let mut game = GameState::new(atlas, level);

    println!("=== Fog Engine ===");

    loop {
        game.process_input();

        clear_background(BLACK);

        let batch = match game
            .compositor
            .render_frame(game.view_offset, &game.map, &game.player)
        {
            Ok(batch) => batch,
            Err(e) => {
                // Table and atlas disagree - broken installation
                eprintln!("Compositor error: {}", e);
                std::process::exit(1);
            }
        };

        for cmd in &batch {
            blit(&sheet, cmd);
        }

        draw_view_frame(&game);
        draw_minimap(&game);
        draw_status(&game);

        next_frame().await;
    }
}

/// Blit one draw command
///
/// Core coordinates are bottom-up; macroquad's screen and texture
/// origins are top-left, so both rects convert here and nowhere else.
fn blit(sheet: &Texture2D, cmd: &DrawCommand) {
    let dest_y = screen_height() - (cmd.y + cmd.h) as f32;
    let src_y = sheet.height() - (cmd.source_y + cmd.source_h) as f32;

    draw_texture_ex(
        sheet,
        cmd.x as f32,
        dest_y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(cmd.w as f32, cmd.h as f32)),
            source: Some(Rect::new(
                cmd.source_x as f32,
                src_y,
                cmd.source_w as f32,
                cmd.source_h as f32,
            )),
            flip_x: cmd.flip_horizontally,
            ..Default::default()
        },
    );
}

/// Outline the corridor view
fn draw_view_frame(game: &GameState) {
    let x = game.view_offset.x as f32;
    let y = screen_height() - (game.view_offset.y + VIEW_HEIGHT) as f32;
    draw_rectangle_lines(x, y, VIEW_WIDTH as f32, VIEW_HEIGHT as f32, 2.0, RED);
}

/// ASCII minimap with the player arrow overlaid
fn draw_minimap(game: &GameState) {
    for (i, row) in game.map.rows().iter().enumerate() {
        let line = if i as i32 == game.player.y {
            let mut chars: Vec<char> = row.chars().collect();
            if let Some(c) = chars.get_mut(game.player.x as usize) {
                *c = game.player.facing.arrow();
            }
            chars.into_iter().collect()
        } else {
            row.clone()
        };
        draw_text(&line, 10.0, 30.0 + i as f32 * 20.0, 20.0, LIGHTGRAY);
    }
}

/// Position and facing labels plus the control hints
fn draw_status(game: &GameState) {
    draw_text(&game.level_name, 1000.0, 30.0, 24.0, WHITE);
    draw_text(
        &format!("Pos: ({}, {})", game.player.x, game.player.y),
        1000.0,
        60.0,
        20.0,
        LIGHTGRAY,
    );
    draw_text(
        &format!("Facing: {}", game.player.facing.label()),
        1000.0,
        85.0,
        20.0,
        LIGHTGRAY,
    );
    draw_text("WASD move, Q/E turn", 1000.0, 680.0, 20.0, GRAY);
}
