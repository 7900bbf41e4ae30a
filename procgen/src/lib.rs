pub use direction::CardinalDirection;
pub use grid_2d::{Coord, Grid, Size};
pub use rand_range::RandomRange;
use serde::{Deserialize, Serialize};

mod branch;
mod carve;
mod cell;
mod coord;
mod error;
mod grid;
mod resolve;

pub use branch::inject_branches;
pub use carve::{carve_path, Carved};
pub use cell::{Cell, CellKind};
pub use coord::{chebyshev_distance, direction_to, DirectionSet, NotAdjacent};
pub use error::GenerateError;
pub use grid::{place_start_and_goal, wall_grid, MIN_START_GOAL_DISTANCE};
pub use resolve::resolve_legal_directions;

pub const CHANGE_PERCENT: u32 = 50;
pub const BRANCH_PERCENT: u32 = 50;
pub const MAX_CARVE_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chance that the carver picks a new heading on each step.
    pub change_percent: u32,
    /// Chance that a wall is considered for a branch.
    pub branch_percent: u32,
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            change_percent: CHANGE_PERCENT,
            branch_percent: BRANCH_PERCENT,
            max_attempts: MAX_CARVE_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MapSpec {
    pub size: Size,
    pub config: GeneratorConfig,
}

impl MapSpec {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            config: GeneratorConfig::default(),
        }
    }
}

/// A board with a single route from start to goal and a few dead ends.
///
/// A `Map` read back through serde is trusted input: only `generate`
/// establishes the board's invariants, and decoding does not re-check them.
/// Deserialize only maps this crate serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Map {
    grid: Grid<Cell>,
    start: Coord,
    goal: Coord,
}

impl Map {
    pub fn generate<R: RandomRange>(spec: &MapSpec, rng: &mut R) -> Result<Self, GenerateError> {
        let mut grid = wall_grid(spec.size);
        let (start, goal) = place_start_and_goal(&mut grid, rng)?;
        let Carved { mut grid, attempts } = carve_path(
            &grid,
            start,
            goal,
            spec.config.change_percent,
            spec.config.max_attempts,
            rng,
        )?;
        let branches = inject_branches(&mut grid, spec.config.branch_percent, rng);
        resolve_legal_directions(&mut grid, rng);
        log::debug!(
            "generated {}x{} map from {:?} to {:?} ({} attempts, {} branches)",
            spec.size.width(),
            spec.size.height(),
            start,
            goal,
            attempts,
            branches.len()
        );
        Ok(Self { grid, start, goal })
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.grid.get(coord)
    }

    pub fn legal_directions(&self, coord: Coord) -> DirectionSet {
        self.cell(coord)
            .map(|cell| cell.legal_directions)
            .unwrap_or_default()
    }

    /// Whether a piece standing on `from` may take a single step to `to`.
    pub fn can_move(&self, from: Coord, to: Coord) -> bool {
        match direction_to(from, to) {
            Ok(direction) => self.legal_directions(from).contains(direction),
            Err(_) => false,
        }
    }

    pub fn branches(&self) -> Vec<Coord> {
        self.grid
            .enumerate()
            .filter(|(_, cell)| cell.kind == CellKind::Branch)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// The carved route from start to goal inclusive, recovered by following
    /// each passage back to the cell it was carved from.
    pub fn path(&self) -> Vec<Coord> {
        let mut path = vec![self.goal];
        let mut current = CardinalDirection::all()
            .map(|direction| self.goal + direction.coord())
            .find(|&coord| self.cell(coord).map_or(false, |cell| cell.kind.is_course()));
        while let Some(coord) = current {
            path.push(coord);
            current = self.cell(coord).and_then(|cell| cell.previous);
        }
        path.reverse();
        path
    }
}
