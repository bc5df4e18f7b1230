//! Window configuration for the desktop app.

use macroquad::window::Conf;

use crate::APP_NAME;
use crate::app_loop::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::ui_render::TILE_SIZE;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: WORLD_WIDTH as i32 * TILE_SIZE as i32,
        window_height: WORLD_HEIGHT as i32 * TILE_SIZE as i32,
        // Linux desktop sessions may not scale low-DPI framebuffers automatically.
        // Request a high-DPI framebuffer so text and UI size track display scale.
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::build_window_conf;

    #[test]
    fn enables_high_dpi_rendering() {
        let conf = build_window_conf();
        assert!(conf.high_dpi);
    }

    #[test]
    fn window_matches_the_tile_grid() {
        let conf = build_window_conf();
        assert_eq!(conf.window_width, 1280);
        assert_eq!(conf.window_height, 640);
    }
}
