//! The seeded dungeon world: generation pipeline, avatar, input record.
//!
//! A `World` is a plain value built once from `(width, height, seed)` and
//! mutated in place by avatar moves. Everything it does is deterministic:
//! the same seed and the same token sequence always reproduce the same
//! grid and avatar position, which is what save/load and replay rely on.

use xxhash_rust::xxh3::Xxh3;

use crate::grid::Grid;
use crate::mapgen;
use crate::rng::WorldRng;
use crate::types::{Pos, TileKind, WorldError};

/// Smallest dimension for which the room placement draw ranges are non-empty.
pub const MIN_DIMENSION: usize = 10;

/// Avatar spawn candidates are restricted to rows below this.
const SPAWN_ROW_LIMIT: i32 = 10;

pub struct World {
    seed: i32,
    rng: WorldRng,
    grid: Grid,
    room_centers: Vec<Pos>,
    // Source of truth for the avatar; the `Avatar` grid cell is a projection
    // updated in the same operation.
    avatar: Option<Pos>,
    input_record: Vec<char>,
}

impl World {
    /// Generate a world. Construction runs the whole pipeline (room count
    /// draw, room placement, spanning tree, corridor carving) to completion;
    /// it either fully succeeds or fails before any state is exposed.
    pub fn new(width: usize, height: usize, seed: i32) -> Result<Self, WorldError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(WorldError::InvalidArgument(format!(
                "world must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {width}x{height}"
            )));
        }

        let mut rng = WorldRng::new(seed);
        let mut grid = Grid::new(width, height);
        let room_centers = mapgen::generate(&mut grid, &mut rng)?;

        Ok(Self { seed, rng, grid, room_centers, avatar: None, input_record: Vec::new() })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn avatar_position(&self) -> Option<Pos> {
        self.avatar
    }

    pub fn room_centers(&self) -> &[Pos] {
        &self.room_centers
    }

    pub fn input_record(&self) -> &[char] {
        &self.input_record
    }

    /// Place the avatar on a floor tile in the lower rows. Candidates are
    /// collected x-outer, y-inner in ascending order; the selection draw
    /// taps the raw bounded generator rather than the checked sampler, and
    /// both details are load-bearing for replaying existing seeds.
    /// With no candidate the avatar stays unset and moves are no-ops.
    pub fn initialize_avatar(&mut self) {
        let mut candidates = Vec::new();
        for x in 0..self.grid.width() as i32 {
            for y in 0..SPAWN_ROW_LIMIT {
                let pos = Pos { y, x };
                if self.grid.tile_at(pos) == TileKind::Floor {
                    candidates.push(pos);
                }
            }
        }

        if candidates.is_empty() {
            return;
        }
        let index = self.rng.next_bounded(candidates.len() as i32) as usize;
        let spawn = candidates[index];
        self.avatar = Some(spawn);
        self.grid.set_tile(spawn, TileKind::Avatar);
    }

    /// Apply one movement token (case-insensitive `W`/`A`/`S`/`D`). The
    /// target must be in bounds and not a wall; walls are the only blocking
    /// kind. Illegal moves are silent no-ops, never errors. Recording the
    /// token is the caller's job and happens whether or not the move lands.
    pub fn move_avatar(&mut self, token: char) {
        let Some(current) = self.avatar else {
            return;
        };
        let target = step_target(current, token);
        if self.grid.tile_at(target) == TileKind::Wall {
            return;
        }
        self.grid.set_tile(current, TileKind::Floor);
        self.grid.set_tile(target, TileKind::Avatar);
        self.avatar = Some(target);
    }

    /// Append one token to the input record, unconditionally. Used for both
    /// movement tokens and the quit-sequence prefix.
    pub fn record_input(&mut self, token: char) {
        self.input_record.push(token);
    }

    /// HUD description of the tile at `pos`; out-of-bounds reads as nothing.
    pub fn tile_name(&self, pos: Pos) -> &'static str {
        if self.grid.in_bounds(pos) {
            self.grid.tile_at(pos).description()
        } else {
            TileKind::Nothing.description()
        }
    }

    /// xxh3 over the tile codes plus the avatar position. Two worlds with
    /// equal hashes went through the same seed and move history.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        let codes: Vec<u8> = self.grid.tiles().iter().map(|tile| tile.code()).collect();
        hasher.update(&codes);
        if let Some(pos) = self.avatar {
            hasher.update(&pos.x.to_le_bytes());
            hasher.update(&pos.y.to_le_bytes());
        }
        hasher.digest()
    }
}

/// One axis step for a movement token; unknown tokens target the current
/// cell, which commits as a harmless self-move.
fn step_target(from: Pos, token: char) -> Pos {
    match token.to_ascii_uppercase() {
        'W' => Pos { y: from.y + 1, x: from.x },
        'A' => Pos { y: from.y, x: from.x - 1 },
        'S' => Pos { y: from.y - 1, x: from.x },
        'D' => Pos { y: from.y, x: from.x + 1 },
        _ => from,
    }
}
