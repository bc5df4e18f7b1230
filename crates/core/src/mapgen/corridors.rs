//! L-shaped corridor carving between spanning-tree rooms, with inferred
//! bordering walls and corner patch-up.

use crate::grid::Grid;
use crate::types::{Pos, TileKind};

use super::mst::Edge;

const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

pub(super) fn carve_corridors(grid: &mut Grid, centers: &[Pos], edges: &[Edge]) {
    for edge in edges {
        carve_corridor(grid, centers[edge.a], centers[edge.b]);
    }
}

/// Carve one L-shaped corridor: a horizontal leg along the source row, then
/// a vertical leg along the target column.
fn carve_corridor(grid: &mut Grid, from: Pos, to: Pos) {
    let min_x = from.x.min(to.x);
    let max_x = from.x.max(to.x);
    let min_y = from.y.min(to.y);
    let max_y = from.y.max(to.y);

    for x in min_x..=max_x {
        let pos = Pos { y: from.y, x };
        if grid.tile_at(pos) != TileKind::Floor {
            grid.set_tile(pos, TileKind::Floor);
        }
    }

    // Elbow marker. The vertical pass below reclaims it as floor (Sand is
    // not Floor), so the turn never blocks floor-only paths and the final
    // grid carries no Sand; the write order is part of the seed contract.
    grid.set_tile(Pos { y: max_y, x: to.x }, TileKind::Sand);

    for y in min_y..=max_y {
        let pos = Pos { y, x: to.x };
        if grid.tile_at(pos) != TileKind::Floor {
            grid.set_tile(pos, TileKind::Floor);
        }
    }

    infer_walls(grid, from, to, min_x, max_x, min_y, max_y);
    patch_corner(grid, from);
    patch_corner(grid, to);
}

/// Line both legs with walls wherever the neighboring cell is still empty;
/// anything already carved or built is left alone. The horizontal band runs
/// one cell past its far end to cover the elbow column.
fn infer_walls(
    grid: &mut Grid,
    from: Pos,
    to: Pos,
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
) {
    for x in min_x..=max_x + 1 {
        for y in [from.y - 1, from.y + 1] {
            let pos = Pos { y, x };
            if grid.tile_at(pos) == TileKind::Nothing {
                grid.set_tile(pos, TileKind::Wall);
            }
        }
    }
    for y in min_y..=max_y {
        for x in [to.x - 1, to.x + 1] {
            let pos = Pos { y, x };
            if grid.tile_at(pos) == TileKind::Nothing {
                grid.set_tile(pos, TileKind::Wall);
            }
        }
    }
}

/// Close the diagonal gaps an L-turn leaves at a leg endpoint.
fn patch_corner(grid: &mut Grid, center: Pos) {
    for (dx, dy) in ORTHOGONAL {
        let pos = Pos { y: center.y + dy, x: center.x + dx };
        if grid.tile_at(pos) == TileKind::Nothing {
            grid.set_tile(pos, TileKind::Wall);
        }
    }
}
