use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::coords::Coord;
use crate::types::PieceKind;

/// A piece on the board. Pieces are plain values; moving one is a
/// remove-and-reinsert on the occupancy map, no identity carries over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: usize,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: usize) -> Self {
        Self { kind, owner }
    }
}

/// Sparse occupancy map over the unbounded lattice. This is the sole source
/// of truth for board state. Every committed state with at least one piece
/// must form a single 8-connected cluster; callers validate through the
/// `connected_after_*` probes before mutating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    cells: HashMap<Coord, Piece>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, coord: Coord) -> Option<&Piece> {
        self.cells.get(&coord)
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    pub fn insert(&mut self, coord: Coord, piece: Piece) -> Option<Piece> {
        self.cells.insert(coord, piece)
    }

    pub fn remove(&mut self, coord: Coord) -> Option<Piece> {
        self.cells.remove(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Coord, &Piece)> {
        self.cells.iter()
    }

    /// Owners of every king still on the board.
    pub fn king_owners(&self) -> Vec<usize> {
        self.cells
            .values()
            .filter(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.owner)
            .collect()
    }

    /// Inclusive (min, max) corners of the occupied area, if any.
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        let mut coords = self.cells.keys();
        let first = *coords.next()?;
        let mut min = first;
        let mut max = first;
        for coord in coords {
            min.x = min.x.min(coord.x);
            min.y = min.y.min(coord.y);
            max.x = max.x.max(coord.x);
            max.y = max.y.max(coord.y);
        }
        Some((min, max))
    }

    /// Whether the live occupancy forms one 8-connected cluster.
    pub fn is_connected(&self) -> bool {
        connected(&self.cells)
    }

    /// Whether adding a piece at `at` leaves the board connected. Evaluates
    /// a hypothetical copy; the live map is never touched.
    pub fn connected_after_place(&self, at: Coord) -> bool {
        let mut hypothetical = self.cells.clone();
        hypothetical.insert(at, Piece::new(PieceKind::Pawn, usize::MAX));
        connected(&hypothetical)
    }

    /// Whether moving the piece at `from` to `to` leaves the board connected.
    pub fn connected_after_move(&self, from: Coord, to: Coord) -> bool {
        let mut hypothetical = self.cells.clone();
        if let Some(piece) = hypothetical.remove(&from) {
            hypothetical.insert(to, piece);
        }
        connected(&hypothetical)
    }
}

/// Flood fill from an arbitrary seed; connected iff every occupied cell is
/// reached. Zero or one cells are trivially connected.
fn connected(cells: &HashMap<Coord, Piece>) -> bool {
    if cells.len() <= 1 {
        return true;
    }

    let seed = match cells.keys().next() {
        Some(coord) => *coord,
        None => return true,
    };
    let mut visited = HashSet::from([seed]);
    let mut queue = VecDeque::from([seed]);

    while let Some(coord) = queue.pop_front() {
        for neighbor in coord.neighbors() {
            if cells.contains_key(&neighbor) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    visited.len() == cells.len()
}
