//! Per-piece legal-move generation on the unbounded lattice.
//!
//! Connectivity is not checked here; the game controller probes each
//! candidate through `Board::connected_after_move` before committing.

use smallvec::SmallVec;

use crate::board::Board;
use crate::coords::{Coord, Direction, UNIT_VECTORS};
use crate::types::PieceKind;

/// Destination list. Stepping pieces (pawn, knight, king) fit inline;
/// sliders spill to the heap.
pub type MoveList = SmallVec<[Coord; 16]>;

/// There is no board edge, so sliding rays need a computational stop.
/// Purely a safety bound, never a game-relevant limit.
pub const SLIDE_CAP: u32 = 100;

/// Legal destinations for the piece at `origin`, ignoring connectivity.
/// Empty if the cell is unoccupied.
pub fn legal_destinations(board: &Board, origin: Coord) -> MoveList {
    let Some(piece) = board.get(origin) else {
        return MoveList::new();
    };
    let owner = piece.owner;

    let mut moves = MoveList::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, origin, owner, &mut moves),
        PieceKind::Knight => {
            step_moves(board, origin.knight_jumps(), owner, &mut moves);
        }
        PieceKind::King => {
            step_moves(board, origin.neighbors(), owner, &mut moves);
        }
        PieceKind::Rook => slide_moves(board, origin, owner, &Direction::ORTHOGONAL, &mut moves),
        PieceKind::Bishop => slide_moves(board, origin, owner, &Direction::DIAGONAL, &mut moves),
        PieceKind::Queen => slide_moves(board, origin, owner, &Direction::ALL, &mut moves),
    }
    moves
}

/// Orthogonal steps only onto empty cells; diagonal steps only onto enemy
/// pieces. A pawn can never capture straight nor drift diagonally into space.
fn pawn_moves(board: &Board, origin: Coord, owner: usize, moves: &mut MoveList) {
    for dir in Direction::ORTHOGONAL {
        let target = origin.step(dir);
        if !board.is_occupied(target) {
            moves.push(target);
        }
    }
    for dir in Direction::DIAGONAL {
        let target = origin.step(dir);
        if let Some(occupant) = board.get(target) {
            if occupant.owner != owner {
                moves.push(target);
            }
        }
    }
}

/// Single-step rule shared by knight and king: land anywhere in the offset
/// set that is empty or enemy-held.
fn step_moves(
    board: &Board,
    targets: impl Iterator<Item = Coord>,
    owner: usize,
    moves: &mut MoveList,
) {
    for target in targets {
        match board.get(target) {
            Some(occupant) if occupant.owner == owner => {}
            _ => moves.push(target),
        }
    }
}

/// Sliding rule for rook/bishop/queen, parameterized by direction set.
///
/// Friendly pieces are transparent: the ray may not land on them but keeps
/// going past. An enemy piece is a capture square and terminates the ray.
fn slide_moves(
    board: &Board,
    origin: Coord,
    owner: usize,
    directions: &[Direction],
    moves: &mut MoveList,
) {
    for &dir in directions {
        let unit = UNIT_VECTORS[&dir];
        let mut cursor = origin;
        for _ in 0..SLIDE_CAP {
            cursor = cursor.add(unit);
            match board.get(cursor) {
                None => moves.push(cursor),
                Some(occupant) if occupant.owner != owner => {
                    moves.push(cursor);
                    break;
                }
                Some(_) => {}
            }
        }
    }
}
