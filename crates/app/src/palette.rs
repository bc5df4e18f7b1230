//! Glyph and color assignments for each tile kind.

use game_core::TileKind;
use macroquad::color::{BLACK, Color, WHITE, YELLOW};

const WALL_BACKGROUND: Color = Color { r: 0.412, g: 0.412, b: 0.412, a: 1.0 };
const WALL_GLYPH: Color = Color { r: 0.847, g: 0.502, b: 0.502, a: 1.0 };
const FLOOR_GLYPH: Color = Color { r: 0.502, g: 0.753, b: 0.502, a: 1.0 };

/// One character per cell; the avatar glyph sits on a black cell like floor.
pub fn glyph(tile: TileKind) -> &'static str {
    match tile {
        TileKind::Nothing => " ",
        TileKind::Wall => "#",
        TileKind::Floor => "·",
        TileKind::Avatar => "@",
        TileKind::Sand => "▒",
    }
}

pub fn glyph_color(tile: TileKind) -> Color {
    match tile {
        TileKind::Nothing => BLACK,
        TileKind::Wall => WALL_GLYPH,
        TileKind::Floor => FLOOR_GLYPH,
        TileKind::Avatar => WHITE,
        TileKind::Sand => YELLOW,
    }
}

/// Cell background fill. Only walls carry a visible fill; everything else
/// stays on the cleared black canvas.
pub fn background_color(tile: TileKind) -> Color {
    match tile {
        TileKind::Wall => WALL_BACKGROUND,
        _ => BLACK,
    }
}
