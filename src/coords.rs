use std::collections::HashMap;
use std::fmt;

use itertools::iproduct;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];
}

/// A cell on the unbounded integer lattice. Only equality and the fixed
/// adjacency relations below are meaningful; there is no board edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Coord) -> Self {
        Coord::new(self.x + other.x, self.y + other.y)
    }

    pub fn step(self, dir: Direction) -> Self {
        self.add(UNIT_VECTORS[&dir])
    }

    /// The 8 surrounding cells (Δx, Δy ∈ {-1, 0, 1}, excluding the origin).
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dx, dy)| (dx, dy) != (0, 0))
            .map(move |(dx, dy)| Coord::new(self.x + dx, self.y + dy))
    }

    pub fn knight_jumps(self) -> impl Iterator<Item = Coord> {
        KNIGHT_OFFSETS.iter().map(move |&off| self.add(off))
    }
}

impl Default for Coord {
    fn default() -> Self {
        Coord::new(0, 0)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub static UNIT_VECTORS: Lazy<HashMap<Direction, Coord>> = Lazy::new(|| {
    use Direction::*;
    HashMap::from([
        (North, Coord::new(0, 1)),
        (NorthEast, Coord::new(1, 1)),
        (East, Coord::new(1, 0)),
        (SouthEast, Coord::new(1, -1)),
        (South, Coord::new(0, -1)),
        (SouthWest, Coord::new(-1, -1)),
        (West, Coord::new(-1, 0)),
        (NorthWest, Coord::new(-1, 1)),
    ])
});

pub const KNIGHT_OFFSETS: [Coord; 8] = [
    Coord { x: 1, y: 2 },
    Coord { x: 2, y: 1 },
    Coord { x: 2, y: -1 },
    Coord { x: 1, y: -2 },
    Coord { x: -1, y: -2 },
    Coord { x: -2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -1, y: 2 },
];
