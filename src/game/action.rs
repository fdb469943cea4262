use serde::{Deserialize, Serialize};

use crate::coords::Coord;
use crate::types::{ActionType, PieceKind};

/// One discrete player gesture: pick a roster piece, drop it on a cell, or
/// touch a board cell (which selects or moves depending on selection state).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GameAction {
    pub player_index: usize,
    pub action_type: ActionType,
    pub payload: ActionPayload,
}

impl GameAction {
    pub fn new(player_index: usize, action_type: ActionType) -> Self {
        Self {
            player_index,
            action_type,
            payload: ActionPayload::None,
        }
    }

    pub fn with_payload(mut self, payload: ActionPayload) -> Self {
        self.payload = payload;
        self
    }

    pub fn select_roster_piece(player_index: usize, kind: PieceKind) -> Self {
        Self::new(player_index, ActionType::SelectRosterPiece)
            .with_payload(ActionPayload::Piece(kind))
    }

    pub fn place_piece(player_index: usize, at: Coord) -> Self {
        Self::new(player_index, ActionType::PlacePiece).with_payload(ActionPayload::Cell(at))
    }

    pub fn touch_cell(player_index: usize, at: Coord) -> Self {
        Self::new(player_index, ActionType::TouchCell).with_payload(ActionPayload::Cell(at))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionPayload {
    #[default]
    None,
    Piece(PieceKind),
    Cell(Coord),
}
