pub mod app_loop;
pub mod frame_input;
pub mod palette;
pub mod save_path;
pub mod seed;
pub mod settings_file;
pub mod ui_render;
pub mod window_config;

pub const APP_NAME: &str = "Delve";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: i32) -> String {
    seed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_seed_is_exact_decimal() {
        assert_eq!(format_seed(0), "0");
        assert_eq!(format_seed(12_345), "12345");
        assert_eq!(format_seed(-42), "-42");
        assert_eq!(format_seed(i32::MAX), "2147483647");
    }
}
