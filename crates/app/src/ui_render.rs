//! Rendering for the map view and the canvas menus.

use game_core::{Pos, World};
use macroquad::prelude::*;

use crate::app_loop::{AppMode, AppState};
use crate::format_seed;
use crate::palette;

pub const TILE_SIZE: f32 = 16.0;

const MENU_FONT_SIZE: f32 = 40.0;
const MENU_LINE_STEP: f32 = 60.0;
const GLYPH_FONT_SIZE: f32 = 14.0;
const STATUS_FONT_SIZE: f32 = 12.0;

pub fn draw_frame(state: &AppState) {
    clear_background(BLACK);

    match state.mode {
        AppMode::Menu => draw_menu(state.last_seed),
        AppMode::SeedEntry => draw_seed_entry(&state.seed_input),
        AppMode::Playing | AppMode::Replaying => {
            if let Some(world) = state.world.as_ref() {
                draw_world(world);
                draw_status(&status_line(world, state.mode, state.status.as_deref()));
                draw_hover_readout(world);
            }
        }
    }
}

fn draw_menu(last_seed: Option<i32>) {
    let center_x = screen_width() / 2.0;
    let center_y = screen_height() / 2.0;

    for (index, line) in menu_lines().iter().enumerate() {
        let y = center_y - 100.0 + index as f32 * MENU_LINE_STEP;
        draw_centered_text(line, center_x, y, MENU_FONT_SIZE);
    }

    if let Some(seed) = last_seed {
        let line = format!("Last seed: {}", format_seed(seed));
        draw_centered_text(&line, center_x, center_y + 200.0, 20.0);
    }
}

fn draw_seed_entry(seed_input: &str) {
    let center_x = screen_width() / 2.0;
    let center_y = screen_height() / 2.0;

    draw_centered_text("Enter Seed:", center_x, center_y, MENU_FONT_SIZE);
    draw_rectangle(center_x - 150.0, center_y + 20.0, 300.0, 40.0, WHITE);

    let digits_width = measure_text(seed_input, None, 20, 1.0).width;
    draw_text(seed_input, center_x - digits_width / 2.0, center_y + 48.0, 20.0, BLACK);
}

/// Tile (0,0) renders at the bottom-left corner; the screen row is flipped.
fn draw_world(world: &World) {
    let grid = world.grid();
    let height = grid.height();

    for y in 0..height {
        let screen_y = (height - 1 - y) as f32 * TILE_SIZE;
        for x in 0..grid.width() {
            let tile = grid.tile_at(Pos { y: y as i32, x: x as i32 });
            let screen_x = x as f32 * TILE_SIZE;

            draw_rectangle(
                screen_x,
                screen_y,
                TILE_SIZE,
                TILE_SIZE,
                palette::background_color(tile),
            );
            draw_text(
                palette::glyph(tile),
                screen_x + TILE_SIZE / 4.0,
                screen_y + TILE_SIZE - 3.0,
                GLYPH_FONT_SIZE,
                palette::glyph_color(tile),
            );
        }
    }
}

/// Name of the tile under the mouse cursor, in the same flipped tile
/// coordinates the map renders in.
fn draw_hover_readout(world: &World) {
    let (mouse_x, mouse_y) = mouse_position();
    let tile_x = (mouse_x / TILE_SIZE).floor() as i32;
    let tile_y = world.grid().height() as i32 - 1 - (mouse_y / TILE_SIZE).floor() as i32;

    let name = world.tile_name(Pos { y: tile_y, x: tile_x });
    let readout = format!("Tile: {name} ({tile_x},{tile_y})");
    draw_text(&readout, 5.0 * TILE_SIZE, 2.0 * TILE_SIZE, STATUS_FONT_SIZE, WHITE);
}

fn draw_status(status: &str) {
    draw_text(status, 5.0, screen_height() - 5.0, STATUS_FONT_SIZE, WHITE);
}

fn draw_centered_text(text: &str, center_x: f32, baseline_y: f32, font_size: f32) {
    let width = measure_text(text, None, font_size as u16, 1.0).width;
    draw_text(text, center_x - width / 2.0, baseline_y, font_size, WHITE);
}

fn menu_lines() -> [&'static str; 5] {
    [
        "N: New World (Random)",
        "S: New World (Seed)",
        "L: Load",
        "R: Replay",
        "Q: Quit",
    ]
}

/// Bottom status bar: seed, mode, move count, and any transient message.
fn status_line(world: &World, mode: AppMode, message: Option<&str>) -> String {
    let mode_label = match mode {
        AppMode::Replaying => "replay",
        _ => "play",
    };
    let mut line = format!(
        "Seed: {}  Mode: {mode_label}  Moves: {}  (:Q saves and quits)",
        format_seed(world.seed()),
        world.input_record().len()
    );
    if let Some(message) = message {
        line.push_str("  ");
        line.push_str(message);
    }
    line
}
