use crate::cell::{Cell, CellKind};
use crate::error::GenerateError;
use direction::CardinalDirection;
use grid_2d::{Coord, Grid};
use rand_range::{roll_percent, RandomRange};

pub struct Carved {
    pub grid: Grid<Cell>,
    pub attempts: u32,
}

struct Course<'a> {
    grid: &'a Grid<Cell>,
    goal: Coord,
}

impl<'a> Course<'a> {
    fn is_course(&self, coord: Coord) -> Option<bool> {
        self.grid.get(coord).map(|cell| cell.kind.is_course())
    }

    /// Whether the walk may step onto `candidate` while heading `direction`.
    /// Apart from the cell behind it, the candidate must be surrounded by
    /// cells that are not yet part of the course, so the path never touches
    /// itself.
    fn can_extend(&self, candidate: Coord, direction: CardinalDirection) -> bool {
        match self.is_course(candidate) {
            None | Some(true) => return false,
            Some(false) => (),
        }
        let is_goal = candidate == self.goal;
        let behind = direction.opposite();
        CardinalDirection::all()
            .filter(|&ahead| ahead != behind)
            .all(|ahead| match self.is_course(candidate + ahead.coord()) {
                Some(is_course) => !is_course,
                None => is_goal,
            })
    }

    fn select_direction<R: RandomRange>(
        &self,
        from: Coord,
        rng: &mut R,
    ) -> Option<CardinalDirection> {
        let possible = CardinalDirection::all()
            .filter(|direction| self.can_extend(from + direction.coord(), *direction))
            .collect::<Vec<_>>();
        if possible.is_empty() {
            return None;
        }
        Some(possible[rng.rand_range(0, possible.len() as u32 - 1) as usize])
    }

    fn next_step<R: RandomRange>(
        &self,
        from: Coord,
        direction: CardinalDirection,
        change_percent: u32,
        rng: &mut R,
    ) -> Option<(Coord, CardinalDirection)> {
        let candidate = from + direction.coord();
        if !self.can_extend(candidate, direction) || roll_percent(rng, change_percent) {
            let direction = self.select_direction(from, rng)?;
            Some((from + direction.coord(), direction))
        } else {
            Some((candidate, direction))
        }
    }
}

fn try_carve<R: RandomRange>(
    grid: &mut Grid<Cell>,
    start: Coord,
    goal: Coord,
    change_percent: u32,
    rng: &mut R,
) -> Option<()> {
    let mut position = start;
    let mut direction = Course { grid: &*grid, goal }.select_direction(start, rng)?;
    while position != goal {
        let (next, next_direction) =
            Course { grid: &*grid, goal }.next_step(position, direction, change_percent, rng)?;
        if next != goal {
            let cell = grid.get_checked_mut(next);
            cell.kind = CellKind::Passage;
            cell.previous = Some(position);
        }
        position = next;
        direction = next_direction;
    }
    Some(())
}

/// Walks randomly from start to goal, restarting from a fresh copy of `grid`
/// whenever the walk paints itself into a corner.
pub fn carve_path<R: RandomRange>(
    grid: &Grid<Cell>,
    start: Coord,
    goal: Coord,
    change_percent: u32,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Carved, GenerateError> {
    for attempt in 1..=max_attempts {
        let mut candidate = grid.clone();
        if try_carve(&mut candidate, start, goal, change_percent, rng).is_some() {
            log::debug!("carved a route on attempt {}", attempt);
            return Ok(Carved {
                grid: candidate,
                attempts: attempt,
            });
        }
        log::trace!("carve attempt {} got stuck", attempt);
    }
    log::warn!("can not create a route after {} attempts", max_attempts);
    Err(GenerateError::RouteNotFound {
        attempts: max_attempts,
    })
}
