use crate::coord::DirectionSet;
use grid_2d::Coord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Wall,
    Passage,
    Branch,
    Start,
    Goal,
}

impl CellKind {
    /// Cells the carver has already walked through. The goal is not part of
    /// the course until the walk steps onto it.
    pub fn is_course(self) -> bool {
        match self {
            CellKind::Start | CellKind::Passage => true,
            CellKind::Wall | CellKind::Branch | CellKind::Goal => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub coord: Coord,
    /// The cell the carver stepped from when it made this cell a passage.
    pub previous: Option<Coord>,
    pub legal_directions: DirectionSet,
}

impl Cell {
    pub fn wall(coord: Coord) -> Self {
        Self {
            kind: CellKind::Wall,
            coord,
            previous: None,
            legal_directions: DirectionSet::empty(),
        }
    }
}
