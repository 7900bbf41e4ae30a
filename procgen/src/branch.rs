use crate::cell::{Cell, CellKind};
use crate::grid::{coords_by_column, neighbours_of_kind};
use grid_2d::{Coord, Grid, Size};
use rand_range::{roll_percent, RandomRange};

const MIN_BRANCH_SPACING: i32 = 2;

fn is_on_border(size: Size, coord: Coord) -> bool {
    coord.x == 0
        || coord.y == 0
        || coord.x == size.width() as i32 - 1
        || coord.y == size.height() as i32 - 1
}

/// Walls touching the path along one axis only.
fn touches_path_on_one_axis(grid: &Grid<Cell>, coord: Coord) -> bool {
    let passages = neighbours_of_kind(grid, coord, CellKind::Passage);
    passages.on_east_west_axis() != passages.on_north_south_axis()
}

fn is_spaced_from(coord: Coord, others: &[Coord]) -> bool {
    others.iter().all(|other| {
        (other.x - coord.x).abs() > MIN_BRANCH_SPACING
            && (other.y - coord.y).abs() > MIN_BRANCH_SPACING
    })
}

/// Walls with path on both sides of one axis.
fn is_bridged(grid: &Grid<Cell>, coord: Coord) -> bool {
    use direction::CardinalDirection::*;
    let passages = neighbours_of_kind(grid, coord, CellKind::Passage);
    (passages.contains(North) && passages.contains(South))
        || (passages.contains(East) && passages.contains(West))
}

/// Turns a sparse selection of walls beside the path into dead-end branches,
/// returning their coordinates.
///
/// Candidates are spaced out before the final check for path on both sides,
/// so a candidate that fails that check still keeps its neighbours from
/// becoming branches.
pub fn inject_branches<R: RandomRange>(
    grid: &mut Grid<Cell>,
    branch_percent: u32,
    rng: &mut R,
) -> Vec<Coord> {
    let size = grid.size();
    let walls = coords_by_column(size)
        .filter(|&coord| grid.get_checked(coord).kind == CellKind::Wall)
        .collect::<Vec<_>>();
    let mut flipped = Vec::new();
    for coord in walls {
        if roll_percent(rng, branch_percent) {
            flipped.push(coord);
        }
    }
    let mut spaced: Vec<Coord> = Vec::new();
    for coord in flipped {
        if !is_on_border(size, coord)
            && touches_path_on_one_axis(grid, coord)
            && is_spaced_from(coord, &spaced)
        {
            spaced.push(coord);
        }
    }
    let branches = spaced
        .into_iter()
        .filter(|&coord| is_bridged(grid, coord))
        .collect::<Vec<_>>();
    for &coord in branches.iter() {
        grid.get_checked_mut(coord).kind = CellKind::Branch;
    }
    log::debug!("added {} branches", branches.len());
    branches
}
