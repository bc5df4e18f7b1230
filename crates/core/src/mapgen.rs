//! Procedural dungeon generation: room placement, spanning tree, corridors.

mod corridors;
mod mst;
mod rooms;

use crate::grid::Grid;
use crate::rng::{WorldRng, uniform_range};
use crate::types::{Pos, WorldError};

const ROOM_COUNT_MIN: i32 = 14;
const ROOM_COUNT_MAX: i32 = 25; // exclusive

/// Run the full pipeline on an empty grid, returning room centers in
/// placement order. Draw order is fixed: room count first, then per-room
/// placement draws, so a seed always replays the same map.
pub(crate) fn generate(grid: &mut Grid, rng: &mut WorldRng) -> Result<Vec<Pos>, WorldError> {
    let room_count = uniform_range(rng, ROOM_COUNT_MIN, ROOM_COUNT_MAX)?;
    let centers = rooms::place_rooms(grid, rng, room_count)?;
    let edges = mst::spanning_edges(&centers);
    corridors::carve_corridors(grid, &centers, &edges);
    Ok(centers)
}
