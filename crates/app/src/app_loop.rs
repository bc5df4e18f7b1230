//! Frame-driven application state machine: menu, seed entry, play, replay.
//!
//! Pure logic over per-frame key lists so the whole flow is testable
//! without a window. Each keypress drives at most one avatar move; the
//! surrounding render loop draws once per frame.

use std::path::Path;

use game_core::{MoveJournal, World, load_journal_from_file, reconstruct, write_journal_file};

pub const WORLD_WIDTH: usize = 80;
pub const WORLD_HEIGHT: usize = 40;

/// Replay cadence: one recorded token per interval.
const REPLAY_STEP_SECONDS: f64 = 0.05;

/// Sentinel previous-key value that never matches the quit prefix.
const NO_PREVIOUS_KEY: char = '@';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Menu,
    SeedEntry,
    Playing,
    Replaying,
}

/// Feeds a recorded token sequence into the world at a fixed cadence.
struct ReplayDriver {
    tokens: Vec<char>,
    next_index: usize,
    last_step_time: f64,
}

pub struct AppState {
    pub mode: AppMode,
    pub world: Option<World>,
    pub seed_input: String,
    pub status: Option<String>,
    /// Seed of the previous session, surfaced on the menu.
    pub last_seed: Option<i32>,
    previous_key: char,
    replay: Option<ReplayDriver>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Menu,
            world: None,
            seed_input: String::new(),
            status: None,
            last_seed: None,
            previous_key: NO_PREVIOUS_KEY,
            replay: None,
            should_quit: false,
        }
    }

    /// Process one frame: every key typed this frame (uppercased, Enter as
    /// `\r`), then a replay step if one is due.
    pub fn tick(&mut self, keys: &[char], now: f64, save_path: Option<&Path>, fresh_seed: i32) {
        for &key in keys {
            self.handle_key(key, now, save_path, fresh_seed);
        }
        if self.mode == AppMode::Replaying {
            self.step_replay(now);
        }
    }

    fn handle_key(&mut self, key: char, now: f64, save_path: Option<&Path>, fresh_seed: i32) {
        match self.mode {
            AppMode::Menu => match key {
                'N' => self.start_world(fresh_seed),
                'S' => {
                    self.mode = AppMode::SeedEntry;
                    self.seed_input.clear();
                }
                'L' => self.load_saved(save_path, fresh_seed),
                'R' => self.start_replay(save_path, now),
                'Q' => self.should_quit = true,
                _ => {}
            },
            AppMode::SeedEntry => match key {
                'S' | '\r' => {
                    let seed = self.seed_input.parse().unwrap_or(0);
                    self.start_world(seed);
                }
                '0'..='9' => self.seed_input.push(key),
                _ => {}
            },
            AppMode::Playing => self.handle_game_key(key, save_path),
            AppMode::Replaying => {
                // Keys are ignored until the recording runs out.
            }
        }
    }

    /// Construct and enter a fresh world. 80x40 always satisfies the
    /// dimension floor, so construction cannot fail here.
    pub fn start_world(&mut self, seed: i32) {
        let mut world = World::new(WORLD_WIDTH, WORLD_HEIGHT, seed)
            .expect("default dimensions satisfy the minimum");
        world.initialize_avatar();
        self.world = Some(world);
        self.mode = AppMode::Playing;
        self.previous_key = NO_PREVIOUS_KEY;
        self.status = None;
    }

    /// Load the save and fast-forward through its recorded moves. A missing
    /// or malformed save falls back to a fresh world on a fresh seed; that
    /// fallback is the loader's job, the core never sees bad save data.
    fn load_saved(&mut self, save_path: Option<&Path>, fresh_seed: i32) {
        let journal = save_path.and_then(|path| load_journal_from_file(path).ok());
        match journal.and_then(|j| reconstruct(WORLD_WIDTH, WORLD_HEIGHT, &j).ok()) {
            Some(world) => {
                self.world = Some(world);
                self.mode = AppMode::Playing;
                self.previous_key = NO_PREVIOUS_KEY;
                self.status = None;
            }
            None => self.start_world(fresh_seed),
        }
    }

    /// Replay the save visibly: rebuild the world at the recorded seed and
    /// feed tokens one per interval. Without a loadable save this stays on
    /// the menu.
    fn start_replay(&mut self, save_path: Option<&Path>, now: f64) {
        let Some(journal) = save_path.and_then(|path| load_journal_from_file(path).ok()) else {
            self.status = Some("no save to replay".to_string());
            return;
        };
        let Ok(mut world) = World::new(WORLD_WIDTH, WORLD_HEIGHT, journal.seed) else {
            return;
        };
        world.initialize_avatar();
        self.world = Some(world);
        self.replay =
            Some(ReplayDriver { tokens: journal.tokens, next_index: 0, last_step_time: now });
        self.mode = AppMode::Replaying;
        self.status = None;
    }

    fn step_replay(&mut self, now: f64) {
        let Some(driver) = self.replay.as_mut() else {
            return;
        };
        let Some(world) = self.world.as_mut() else {
            return;
        };

        while driver.next_index < driver.tokens.len()
            && now - driver.last_step_time >= REPLAY_STEP_SECONDS
        {
            let token = driver.tokens[driver.next_index];
            world.record_input(token);
            world.move_avatar(token);
            driver.next_index += 1;
            driver.last_step_time += REPLAY_STEP_SECONDS;
        }

        if driver.next_index >= driver.tokens.len() {
            self.replay = None;
            self.mode = AppMode::Playing;
            self.previous_key = NO_PREVIOUS_KEY;
        }
    }

    fn handle_game_key(&mut self, key: char, save_path: Option<&Path>) {
        let Some(world) = self.world.as_mut() else {
            return;
        };

        // Two-key quit sequence `:Q` saves and returns to the menu.
        if self.previous_key == ':' && key == 'Q' {
            if let Some(path) = save_path {
                let journal = MoveJournal::from_world(world);
                if let Err(error) = write_journal_file(path, &journal) {
                    self.status = Some(format!("save failed: {error}"));
                }
            }
            self.world = None;
            self.mode = AppMode::Menu;
            self.previous_key = NO_PREVIOUS_KEY;
            return;
        }

        if matches!(key, 'W' | 'A' | 'S' | 'D') {
            world.record_input(key);
            world.move_avatar(key);
        }
        if key == ':' {
            world.record_input(key);
        }
        self.previous_key = key;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
