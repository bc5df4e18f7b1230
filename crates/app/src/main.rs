use macroquad::prelude::*;

use app::app_loop::AppState;
use app::frame_input::capture_frame_input;
use app::save_path::default_save_path;
use app::seed::{SeedChoice, generate_runtime_seed, resolve_seed_from_args};
use app::settings_file::{SETTINGS_FORMAT_VERSION, SettingsFile};
use app::ui_render::draw_frame;
use app::window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed_choice = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let save_path = default_save_path();
    let settings_path = SettingsFile::get_default_path();

    let mut state = AppState::new();
    state.last_seed = settings_path
        .as_deref()
        .and_then(|path| SettingsFile::load(path).ok())
        .map(|settings| settings.last_seed);
    // A seed on the command line skips the menu and starts play directly.
    if let SeedChoice::Cli(seed) = seed_choice {
        state.start_world(seed);
    }

    let mut persisted_seed: Option<i32> = None;

    loop {
        let keys = capture_frame_input();
        state.tick(&keys, get_time(), save_path.as_deref(), generate_runtime_seed());

        // Remember the seed of the session on screen so the next launch
        // can surface it. Failures here never interrupt play.
        if let Some(world) = state.world.as_ref() {
            let seed = world.seed();
            if persisted_seed != Some(seed) {
                persisted_seed = Some(seed);
                state.last_seed = Some(seed);
                if let Some(path) = settings_path.as_deref() {
                    let settings =
                        SettingsFile { format_version: SETTINGS_FORMAT_VERSION, last_seed: seed };
                    let _ = settings.write_atomic(path);
                }
            }
        }

        draw_frame(&state);

        if state.should_quit {
            break;
        }
        next_frame().await;
    }
}
