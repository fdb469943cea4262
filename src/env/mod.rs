//! Presentation boundary. The renderer, whatever it is, sends discrete
//! actions in and gets a full [`Snapshot`] back after every one; rule
//! violations surface only as the snapshot's status line.

use serde::{Deserialize, Serialize};

use crate::coords::Coord;
use crate::game::{GameAction, GameConfig, GameError, GamePhase, GameState, Selection};
use crate::types::{Color, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub at: Coord,
    pub kind: PieceKind,
    pub owner: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub color: Color,
    pub roster: Vec<(PieceKind, u8)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub current_player: usize,
    pub board: Vec<CellView>,
    pub players: Vec<PlayerView>,
    pub selection: Option<Selection>,
    /// Highlight cells for the selected board piece, gameplay only.
    pub legal_destinations: Vec<Coord>,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct GameEnv {
    state: GameState,
}

impl GameEnv {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
        }
    }

    pub fn reset(&mut self) -> Snapshot {
        self.state.reset();
        snapshot_from_state(&self.state, None)
    }

    /// Applies one action. Never fails: a rejected action leaves the game
    /// untouched and comes back as the status string.
    pub fn apply(&mut self, action: GameAction) -> Snapshot {
        match self.state.step(action) {
            Ok(_) => snapshot_from_state(&self.state, None),
            Err(err) => snapshot_from_state(&self.state, Some(&err)),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        snapshot_from_state(&self.state, None)
    }

    pub fn current_player(&self) -> usize {
        self.state.current_player
    }

    pub fn game_state(&self) -> &GameState {
        &self.state
    }
}

pub fn snapshot_from_state(state: &GameState, rejection: Option<&GameError>) -> Snapshot {
    let mut board: Vec<CellView> = state
        .board
        .iter()
        .map(|(&at, piece)| CellView {
            at,
            kind: piece.kind,
            owner: piece.owner,
        })
        .collect();
    board.sort_by_key(|cell| cell.at);

    let status = match rejection {
        Some(err) => err.to_string(),
        None => state.status_message(),
    };

    Snapshot {
        phase: state.phase,
        current_player: state.current_player,
        board,
        players: state
            .players
            .iter()
            .map(|player| PlayerView {
                color: player.color,
                roster: player
                    .roster
                    .iter()
                    .filter(|&(_, amount)| amount > 0)
                    .collect(),
            })
            .collect(),
        selection: state.selection,
        legal_destinations: state
            .selection_destinations()
            .map(|moves| moves.into_vec())
            .unwrap_or_default(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Roster;
    use crate::types::PieceKind::*;

    #[test]
    fn rejections_become_status_lines_without_mutating() {
        let mut env = GameEnv::new(GameConfig::default());
        let snapshot = env.apply(GameAction::select_roster_piece(0, King));
        assert_eq!(snapshot.status, "The King must be placed last.");
        assert!(snapshot.board.is_empty());
        assert!(snapshot.selection.is_none());
        assert_eq!(snapshot.phase, GamePhase::Deployment);
    }

    #[test]
    fn snapshot_lists_rosters_and_occupancy() {
        let mut env = GameEnv::new(GameConfig {
            roster: Roster::king_only(),
        });
        env.apply(GameAction::select_roster_piece(0, King));
        let snapshot = env.apply(GameAction::place_piece(0, Coord::new(0, 0)));
        assert_eq!(snapshot.board.len(), 1);
        assert_eq!(snapshot.board[0].kind, King);
        assert_eq!(snapshot.board[0].owner, 0);
        assert_eq!(snapshot.players[0].roster, vec![]);
        assert_eq!(snapshot.players[1].roster, vec![(King, 1)]);
        assert_eq!(snapshot.status, "Blue, place a piece.");
    }

    #[test]
    fn legal_destinations_populated_for_board_selection() {
        let mut env = GameEnv::new(GameConfig {
            roster: Roster::king_only(),
        });
        env.apply(GameAction::select_roster_piece(0, King));
        env.apply(GameAction::place_piece(0, Coord::new(0, 0)));
        env.apply(GameAction::select_roster_piece(1, King));
        env.apply(GameAction::place_piece(1, Coord::new(1, 0)));

        let snapshot = env.apply(GameAction::touch_cell(0, Coord::new(0, 0)));
        assert_eq!(
            snapshot.selection,
            Some(Selection::Board {
                origin: Coord::new(0, 0)
            })
        );
        // Seven empty steps plus the capture of the blue king.
        assert_eq!(snapshot.legal_destinations.len(), 8);
        assert!(snapshot.legal_destinations.contains(&Coord::new(1, 0)));
    }
}
