use crate::cell::{Cell, CellKind};
use crate::coord::{direction_to, DirectionSet};
use crate::grid::{coords_by_column, neighbours_of_kind};
use direction::CardinalDirection;
use grid_2d::{Coord, Grid};
use rand_range::RandomRange;

const START_PRIORITY: [CardinalDirection; 4] = [
    CardinalDirection::North,
    CardinalDirection::South,
    CardinalDirection::East,
    CardinalDirection::West,
];

fn start_direction(grid: &Grid<Cell>, coord: Coord) -> DirectionSet {
    let passages = neighbours_of_kind(grid, coord, CellKind::Passage);
    START_PRIORITY
        .iter()
        .cloned()
        .find(|&direction| passages.contains(direction))
        .map(DirectionSet::single)
        .unwrap_or_default()
}

fn branch_direction<R: RandomRange>(grid: &Grid<Cell>, coord: Coord, rng: &mut R) -> DirectionSet {
    let options = neighbours_of_kind(grid, coord, CellKind::Passage)
        .iter()
        .collect::<Vec<_>>();
    if options.is_empty() {
        return DirectionSet::empty();
    }
    DirectionSet::single(options[rng.rand_range(0, options.len() as u32 - 1) as usize])
}

fn passage_directions(grid: &Grid<Cell>, coord: Coord, previous: Coord) -> DirectionSet {
    let back = match direction_to(coord, previous) {
        Ok(direction) => direction,
        Err(error) => panic!("corrupt path: {}", error),
    };
    CardinalDirection::all()
        .filter(|&direction| direction != back)
        .filter(|&direction| match grid.get(coord + direction.coord()) {
            Some(neighbour) => match neighbour.kind {
                CellKind::Passage | CellKind::Goal => true,
                CellKind::Branch => neighbour.legal_directions.first() == Some(direction),
                CellKind::Wall | CellKind::Start => false,
            },
            None => false,
        })
        .collect()
}

fn resolve_start_and_branches<R: RandomRange>(grid: &mut Grid<Cell>, rng: &mut R) {
    for coord in coords_by_column(grid.size()) {
        let kind = grid.get_checked(coord).kind;
        let legal_directions = match kind {
            CellKind::Start => start_direction(grid, coord),
            CellKind::Branch => branch_direction(grid, coord, rng),
            _ => continue,
        };
        if legal_directions.is_empty() {
            log::warn!("no way forward from {:?}", coord);
        }
        grid.get_checked_mut(coord).legal_directions = legal_directions;
    }
}

fn resolve_passages(grid: &mut Grid<Cell>) {
    let view: &Grid<Cell> = grid;
    let resolved = view
        .enumerate()
        .filter_map(|(coord, cell)| match (cell.kind, cell.previous) {
            (CellKind::Passage, Some(previous)) => {
                Some((coord, passage_directions(view, coord, previous)))
            }
            _ => None,
        })
        .collect::<Vec<_>>();
    for (coord, legal_directions) in resolved {
        grid.get_checked_mut(coord).legal_directions = legal_directions;
    }
}

/// Computes the directions a piece may move in from every start, branch and
/// passage cell. Branches are resolved first since passages beside a branch
/// only lead into it when the branch continues in the same direction.
pub fn resolve_legal_directions<R: RandomRange>(grid: &mut Grid<Cell>, rng: &mut R) {
    resolve_start_and_branches(grid, rng);
    resolve_passages(grid);
}
