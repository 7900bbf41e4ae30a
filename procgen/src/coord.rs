use direction::{CardinalDirection, CardinalDirectionTable};
use grid_2d::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAdjacent {
    pub from: Coord,
    pub to: Coord,
}

impl fmt::Display for NotAdjacent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {}) is not orthogonally adjacent to ({}, {})",
            self.to.x, self.to.y, self.from.x, self.from.y
        )
    }
}

impl std::error::Error for NotAdjacent {}

/// The direction to step in from `from` to arrive at `to`.
pub fn direction_to(from: Coord, to: Coord) -> Result<CardinalDirection, NotAdjacent> {
    let delta = to - from;
    CardinalDirection::all()
        .find(|direction| direction.coord() == delta)
        .ok_or(NotAdjacent { from, to })
}

pub fn chebyshev_distance(a: Coord, b: Coord) -> i32 {
    let delta = a - b;
    delta.x.abs().max(delta.y.abs())
}

/// A set of cardinal directions, iterated in `CardinalDirection::all()` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionSet {
    table: CardinalDirectionTable<bool>,
}

impl DirectionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(direction: CardinalDirection) -> Self {
        let mut set = Self::empty();
        set.insert(direction);
        set
    }

    pub fn insert(&mut self, direction: CardinalDirection) {
        self.table.set(direction, true);
    }

    pub fn remove(&mut self, direction: CardinalDirection) {
        self.table.set(direction, false);
    }

    pub fn contains(&self, direction: CardinalDirection) -> bool {
        *self.table.get(direction)
    }

    pub fn iter(&self) -> impl Iterator<Item = CardinalDirection> + '_ {
        self.table
            .enumerate()
            .filter(|(_, &present)| present)
            .map(|(direction, _)| direction)
    }

    pub fn len(&self) -> usize {
        self.table.iter().filter(|&&present| present).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<CardinalDirection> {
        self.iter().next()
    }

    pub fn on_north_south_axis(&self) -> bool {
        self.contains(CardinalDirection::North) || self.contains(CardinalDirection::South)
    }

    pub fn on_east_west_axis(&self) -> bool {
        self.contains(CardinalDirection::East) || self.contains(CardinalDirection::West)
    }
}

impl std::iter::FromIterator<CardinalDirection> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = CardinalDirection>>(iter: I) -> Self {
        let mut set = Self::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use direction::CardinalDirection::*;

    #[test]
    fn north_decreases_y() {
        assert_eq!(North.coord(), Coord::new(0, -1));
        assert_eq!(South.coord(), Coord::new(0, 1));
        assert_eq!(East.coord(), Coord::new(1, 0));
        assert_eq!(West.coord(), Coord::new(-1, 0));
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in CardinalDirection::all() {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn direction_to_agrees_with_opposite() {
        let a = Coord::new(3, 4);
        for d in CardinalDirection::all() {
            let b = a + d.coord();
            assert_eq!(direction_to(a, b), Ok(d));
            assert_eq!(direction_to(b, a), Ok(d.opposite()));
        }
    }

    #[test]
    fn direction_to_rejects_non_neighbours() {
        let a = Coord::new(1, 1);
        let others = [
            Coord::new(1, 1),
            Coord::new(2, 2),
            Coord::new(3, 1),
            Coord::new(1, -1),
        ];
        for &b in others.iter() {
            assert_eq!(direction_to(a, b), Err(NotAdjacent { from: a, to: b }));
        }
    }

    #[test]
    fn chebyshev() {
        assert_eq!(chebyshev_distance(Coord::new(0, 0), Coord::new(5, 2)), 5);
        assert_eq!(chebyshev_distance(Coord::new(4, 9), Coord::new(2, 3)), 6);
        assert_eq!(chebyshev_distance(Coord::new(1, 1), Coord::new(1, 1)), 0);
    }

    #[test]
    fn direction_set() {
        let mut set = DirectionSet::empty();
        assert!(set.is_empty());
        set.insert(West);
        set.insert(North);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![North, West]);
        assert_eq!(set.first(), Some(North));
        assert!(set.on_north_south_axis());
        assert!(set.on_east_west_axis());
        set.remove(North);
        assert_eq!(set, DirectionSet::single(West));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn direction_set_follows_table_order_and_serializes() {
        let set: DirectionSet = vec![West, South, East, North].into_iter().collect();
        let all: Vec<_> = CardinalDirection::all().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), all);
        assert_eq!(set.len(), 4);
        let json = serde_json::to_string(&DirectionSet::single(East)).unwrap();
        let decoded: DirectionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, DirectionSet::single(East));
        assert_eq!(decoded.first(), Some(East));
    }
}
