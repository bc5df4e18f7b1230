//! Keyboard input collection for one rendered frame.

use macroquad::input::{KeyCode, get_char_pressed, is_key_pressed};

/// Drain the characters typed this frame, uppercased, with Enter folded
/// into `\r`. The state machine consumes plain chars so every binding
/// matches the recorded token alphabet.
pub fn capture_frame_input() -> Vec<char> {
    let mut keys = Vec::new();

    while let Some(ch) = get_char_pressed() {
        if ch == '\r' || ch == '\n' {
            keys.push('\r');
        } else if ch.is_ascii_graphic() {
            keys.push(ch.to_ascii_uppercase());
        }
    }

    if is_key_pressed(KeyCode::Enter) && !keys.contains(&'\r') {
        keys.push('\r');
    }

    keys
}
