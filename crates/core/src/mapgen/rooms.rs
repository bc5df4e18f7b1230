//! Room placement: wall-bordered floor rectangles stamped onto the grid.

use crate::grid::Grid;
use crate::rng::{WorldRng, uniform_range};
use crate::types::{Pos, TileKind, WorldError};

// Placement draws span `[0, dimension - 9)`, which with the maximum room
// extent of 8 keeps every rectangle fully on the grid.
const PLACEMENT_MARGIN: i32 = 9;
const EXTENT_MIN: i32 = 4;
const EXTENT_MAX: i32 = 9; // exclusive

/// Place `room_count` rooms, returning their centers in placement order.
/// Rooms may overlap freely; the stamping rule keeps floors intact.
pub(super) fn place_rooms(
    grid: &mut Grid,
    rng: &mut WorldRng,
    room_count: i32,
) -> Result<Vec<Pos>, WorldError> {
    let mut centers = Vec::with_capacity(room_count as usize);
    for _ in 0..room_count {
        // Draw order is part of the seed contract: y, height, x, width.
        let y = uniform_range(rng, 0, grid.height() as i32 - PLACEMENT_MARGIN)?;
        let h = uniform_range(rng, EXTENT_MIN, EXTENT_MAX)?;
        let x = uniform_range(rng, 0, grid.width() as i32 - PLACEMENT_MARGIN)?;
        let w = uniform_range(rng, EXTENT_MIN, EXTENT_MAX)?;

        centers.push(Pos { y: y + h / 2, x: x + w / 2 });
        stamp_room(grid, x, y, w, h);
    }
    Ok(centers)
}

/// Border cells become `Wall` unless the cell is already `Floor` (an earlier
/// room's interior or a corridor keeps priority); interior cells become
/// `Floor` unconditionally.
fn stamp_room(grid: &mut Grid, x0: i32, y0: i32, w: i32, h: i32) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            let pos = Pos { y, x };
            let on_border = y == y0 || y == y0 + h - 1 || x == x0 || x == x0 + w - 1;
            if !on_border {
                grid.set_tile(pos, TileKind::Floor);
            } else if grid.tile_at(pos) != TileKind::Floor {
                grid.set_tile(pos, TileKind::Wall);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamped_room_has_wall_border_and_floor_interior() {
        let mut grid = Grid::new(20, 20);
        stamp_room(&mut grid, 3, 5, 6, 4);

        for x in 3..9 {
            assert_eq!(grid.tile_at(Pos { y: 5, x }), TileKind::Wall);
            assert_eq!(grid.tile_at(Pos { y: 8, x }), TileKind::Wall);
        }
        for y in 6..8 {
            assert_eq!(grid.tile_at(Pos { y, x: 3 }), TileKind::Wall);
            assert_eq!(grid.tile_at(Pos { y, x: 8 }), TileKind::Wall);
            for x in 4..8 {
                assert_eq!(grid.tile_at(Pos { y, x }), TileKind::Floor);
            }
        }
    }

    #[test]
    fn later_border_never_overwrites_earlier_floor() {
        let mut grid = Grid::new(20, 20);
        stamp_room(&mut grid, 2, 2, 6, 6);
        // Overlapping room whose border crosses the first room's interior.
        stamp_room(&mut grid, 4, 4, 6, 6);

        assert_eq!(grid.tile_at(Pos { y: 5, x: 4 }), TileKind::Floor);
        assert_eq!(grid.tile_at(Pos { y: 4, x: 5 }), TileKind::Floor);
    }

    #[test]
    fn centers_and_rectangles_stay_on_the_grid() {
        let mut grid = Grid::new(80, 40);
        let mut rng = WorldRng::new(12_345);
        let centers = place_rooms(&mut grid, &mut rng, 24).expect("draws succeed");

        assert_eq!(centers.len(), 24);
        for center in centers {
            assert!(grid.in_bounds(center));
            assert_eq!(grid.tile_at(center), TileKind::Floor, "center {center:?} must be interior");
        }
    }
}
