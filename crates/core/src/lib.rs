pub mod grid;
pub mod journal;
pub mod journal_file;
mod mapgen;
pub mod replay;
pub mod rng;
pub mod types;
pub mod world;

pub use grid::Grid;
pub use journal::MoveJournal;
pub use journal_file::{
    JournalLoadError, load_journal_from_file, parse_save_text, write_journal_file,
};
pub use replay::reconstruct;
pub use rng::{WorldRng, uniform, uniform_range};
pub use types::{Pos, TileKind, WorldError};
pub use world::{MIN_DIMENSION, World};
