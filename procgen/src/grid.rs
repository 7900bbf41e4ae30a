use crate::cell::{Cell, CellKind};
use crate::coord::{chebyshev_distance, DirectionSet};
use crate::error::GenerateError;
use direction::CardinalDirection;
use grid_2d::{Coord, Grid, Size};
use rand_range::RandomRange;

pub const MIN_START_GOAL_DISTANCE: i32 = 5;

pub fn wall_grid(size: Size) -> Grid<Cell> {
    Grid::new_fn(size, Cell::wall)
}

/// Every coordinate in the grid, column by column.
pub fn coords_by_column(size: Size) -> impl Iterator<Item = Coord> {
    let height = size.height() as i32;
    (0..size.width() as i32).flat_map(move |x| (0..height).map(move |y| Coord::new(x, y)))
}

pub fn neighbours_of_kind(grid: &Grid<Cell>, coord: Coord, kind: CellKind) -> DirectionSet {
    CardinalDirection::all()
        .filter(|direction| grid.get(coord + direction.coord()).map(|cell| cell.kind) == Some(kind))
        .collect()
}

pub fn check_size(size: Size) -> Result<(), GenerateError> {
    let min_extent = MIN_START_GOAL_DISTANCE as u32 + 1;
    if size.width() == 0
        || size.height() == 0
        || (size.width() < min_extent && size.height() < min_extent)
    {
        return Err(GenerateError::GridTooSmall { size });
    }
    Ok(())
}

fn random_coord<R: RandomRange>(size: Size, rng: &mut R) -> Coord {
    let x = rng.rand_range(0, size.width() - 1);
    let y = rng.rand_range(0, size.height() - 1);
    Coord::new(x as i32, y as i32)
}

/// Marks a random start and goal at least `MIN_START_GOAL_DISTANCE` apart.
pub fn place_start_and_goal<R: RandomRange>(
    grid: &mut Grid<Cell>,
    rng: &mut R,
) -> Result<(Coord, Coord), GenerateError> {
    check_size(grid.size())?;
    let (start, goal) = loop {
        let start = random_coord(grid.size(), rng);
        let goal = random_coord(grid.size(), rng);
        if chebyshev_distance(start, goal) >= MIN_START_GOAL_DISTANCE {
            break (start, goal);
        }
    };
    grid.get_checked_mut(start).kind = CellKind::Start;
    grid.get_checked_mut(goal).kind = CellKind::Goal;
    Ok((start, goal))
}
