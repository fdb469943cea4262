use serde::{Deserialize, Serialize};

use crate::board::{Board, Piece};
use crate::coords::Coord;
use crate::rules::{MoveList, legal_destinations};
use crate::types::{ActionType, Color, PieceKind};

use super::{
    action::{ActionPayload, GameAction},
    players::PlayerState,
    roster::Roster,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting roster handed to each player. Reduced compositions are
    /// allowed for variants; the king-last rule applies regardless.
    pub roster: Roster,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roster: Roster::standard(),
        }
    }
}

/// Strictly forward: deployment, then gameplay, then ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Deployment,
    Playing,
    Completed { winner: Option<usize> },
}

/// At most one pending selection exists at a time: a roster piece awaiting a
/// placement cell, or an on-board piece awaiting a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Roster { kind: PieceKind },
    Board { origin: Coord },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub board: Board,
    pub players: Vec<PlayerState>,
    pub phase: GamePhase,
    pub current_player: usize,
    pub turn: u32,
    pub selection: Option<Selection>,
}

#[derive(Debug, Clone, Default)]
pub struct StepOutcome {
    pub events: Vec<GameEvent>,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    RosterPieceSelected {
        player: usize,
        kind: PieceKind,
    },
    PiecePlaced {
        player: usize,
        kind: PieceKind,
        at: Coord,
    },
    DeploymentComplete,
    BoardPieceSelected {
        player: usize,
        at: Coord,
    },
    SelectionCleared,
    PieceMoved {
        player: usize,
        from: Coord,
        to: Coord,
        captured: Option<PieceKind>,
    },
    TurnAdvanced {
        next_player: usize,
    },
    GameWon {
        winner: Option<usize>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("game already completed")]
    GameFinished,
    #[error("invalid player index {0}")]
    InvalidPlayer(usize),
    #[error("action by player {actual} but expected {expected}")]
    ActionOutOfTurn { expected: usize, actual: usize },
    #[error("action {action} not allowed during {phase:?}")]
    WrongPhase {
        phase: GamePhase,
        action: ActionType,
    },
    #[error("missing or invalid payload: {0}")]
    InvalidPayload(&'static str),
    #[error("The King must be placed last.")]
    KingNotLast,
    #[error("no {0} left to place")]
    PieceNotInRoster(PieceKind),
    #[error("select a roster piece before placing")]
    NoPendingSelection,
    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),
    #[error("Placement must be adjacent to existing pieces.")]
    PlacementDisconnected,
    #[error("Invalid Move: Breaks board continuity.")]
    MoveDisconnected,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let players = Color::ORDERED
            .iter()
            .map(|&color| PlayerState::new(color, config.roster))
            .collect::<Vec<_>>();

        Self {
            config,
            board: Board::new(),
            players,
            phase: GamePhase::Deployment,
            current_player: 0,
            turn: 0,
            selection: None,
        }
    }

    pub fn reset(&mut self) {
        *self = GameState::new(self.config.clone());
    }

    pub fn current_color(&self) -> Color {
        self.players[self.current_player].color
    }

    /// Processes one player gesture. Rule violations come back as
    /// `GameError` and leave committed state untouched, except that a
    /// continuity rejection also drops the pending selection.
    pub fn step(&mut self, action: GameAction) -> Result<StepOutcome, GameError> {
        if matches!(self.phase, GamePhase::Completed { .. }) {
            return Err(GameError::GameFinished);
        }
        if action.player_index >= self.players.len() {
            return Err(GameError::InvalidPlayer(action.player_index));
        }
        if action.player_index != self.current_player {
            return Err(GameError::ActionOutOfTurn {
                expected: self.current_player,
                actual: action.player_index,
            });
        }

        let mut outcome = StepOutcome::default();
        match (self.phase, action.action_type) {
            (GamePhase::Deployment, ActionType::SelectRosterPiece) => {
                self.handle_roster_selection(&action, &mut outcome)?
            }
            (GamePhase::Deployment, ActionType::PlacePiece) => {
                self.handle_placement(&action, &mut outcome)?
            }
            (GamePhase::Playing, ActionType::TouchCell) => {
                self.handle_touch(&action, &mut outcome)?
            }
            (phase, action_type) => {
                return Err(GameError::WrongPhase {
                    phase,
                    action: action_type,
                });
            }
        }

        if let GamePhase::Completed { winner } = self.phase {
            outcome.done = true;
            outcome.events.push(GameEvent::GameWon { winner });
        }
        Ok(outcome)
    }

    /// Legal destinations for the currently selected board piece, used by
    /// the presentation layer for highlighting.
    pub fn selection_destinations(&self) -> Option<MoveList> {
        match (self.phase, self.selection) {
            (GamePhase::Playing, Some(Selection::Board { origin })) => {
                Some(legal_destinations(&self.board, origin))
            }
            _ => None,
        }
    }

    /// Turn prompt for the current phase; rejected actions are reported
    /// separately through `GameError`.
    pub fn status_message(&self) -> String {
        match self.phase {
            GamePhase::Deployment => {
                let current = &self.players[self.current_player];
                if current.has_pieces_to_place() {
                    format!("{}, place a piece.", current.color.name())
                } else {
                    // Mid-pairing prompt; only reachable when the sides
                    // start from rosters of unequal size.
                    let next = (self.current_player + 1) % self.players.len();
                    format!("Waiting for {}...", self.players[next].color.name())
                }
            }
            GamePhase::Playing => format!("{}'s Turn", self.current_color().name()),
            GamePhase::Completed { winner } => {
                let name = winner
                    .and_then(|idx| self.players.get(idx))
                    .map(|player| player.color.name())
                    .unwrap_or("Nobody");
                format!("{name} Wins! Happy Birthday!")
            }
        }
    }

    fn handle_roster_selection(
        &mut self,
        action: &GameAction,
        outcome: &mut StepOutcome,
    ) -> Result<(), GameError> {
        let kind = match action.payload {
            ActionPayload::Piece(kind) => kind,
            _ => return Err(GameError::InvalidPayload("expected piece kind")),
        };

        let roster = &self.players[self.current_player].roster;
        if kind == PieceKind::King && !roster.only_king_remaining() {
            return Err(GameError::KingNotLast);
        }
        if !roster.contains(kind) {
            return Err(GameError::PieceNotInRoster(kind));
        }

        self.selection = Some(Selection::Roster { kind });
        outcome.events.push(GameEvent::RosterPieceSelected {
            player: self.current_player,
            kind,
        });
        Ok(())
    }

    fn handle_placement(
        &mut self,
        action: &GameAction,
        outcome: &mut StepOutcome,
    ) -> Result<(), GameError> {
        let at = match action.payload {
            ActionPayload::Cell(cell) => cell,
            _ => return Err(GameError::InvalidPayload("expected target cell")),
        };
        let kind = match self.selection {
            Some(Selection::Roster { kind }) => kind,
            _ => return Err(GameError::NoPendingSelection),
        };

        if self.board.is_occupied(at) {
            return Err(GameError::CellOccupied(at));
        }
        // The very first placement of the game has no formation to join.
        if !self.board.is_empty() && !self.board.connected_after_place(at) {
            self.selection = None;
            return Err(GameError::PlacementDisconnected);
        }

        self.players[self.current_player]
            .roster
            .take(kind)
            .map_err(|_| GameError::PieceNotInRoster(kind))?;
        self.board.insert(at, Piece::new(kind, self.current_player));
        self.selection = None;
        outcome.events.push(GameEvent::PiecePlaced {
            player: self.current_player,
            kind,
            at,
        });

        self.advance_turn(outcome);
        if self.players.iter().all(|player| player.roster.is_empty()) {
            self.phase = GamePhase::Playing;
            outcome.events.push(GameEvent::DeploymentComplete);
        }
        Ok(())
    }

    fn handle_touch(
        &mut self,
        action: &GameAction,
        outcome: &mut StepOutcome,
    ) -> Result<(), GameError> {
        let at = match action.payload {
            ActionPayload::Cell(cell) => cell,
            _ => return Err(GameError::InvalidPayload("expected target cell")),
        };

        match self.selection {
            Some(Selection::Board { origin }) => {
                self.selection = None;
                let moves = legal_destinations(&self.board, origin);
                if !moves.contains(&at) {
                    // Off-pattern touch is a plain deselect, not an error.
                    outcome.events.push(GameEvent::SelectionCleared);
                    return Ok(());
                }
                if !self.board.connected_after_move(origin, at) {
                    return Err(GameError::MoveDisconnected);
                }

                let piece = self
                    .board
                    .remove(origin)
                    .ok_or(GameError::InvalidPayload("selected piece vanished"))?;
                let captured = self.board.insert(at, piece).map(|taken| taken.kind);
                outcome.events.push(GameEvent::PieceMoved {
                    player: self.current_player,
                    from: origin,
                    to: at,
                    captured,
                });

                let kings = self.board.king_owners();
                if kings.len() < 2 {
                    self.phase = GamePhase::Completed {
                        winner: kings.first().copied(),
                    };
                } else {
                    self.advance_turn(outcome);
                }
                Ok(())
            }
            _ => {
                match self.board.get(at) {
                    Some(piece) if piece.owner == self.current_player => {
                        self.selection = Some(Selection::Board { origin: at });
                        outcome.events.push(GameEvent::BoardPieceSelected {
                            player: self.current_player,
                            at,
                        });
                    }
                    // Touching an empty or enemy cell with nothing selected
                    // does nothing.
                    _ => {}
                }
                Ok(())
            }
        }
    }

    fn advance_turn(&mut self, outcome: &mut StepOutcome) {
        self.current_player = (self.current_player + 1) % self.players.len();
        self.turn += 1;
        outcome.events.push(GameEvent::TurnAdvanced {
            next_player: self.current_player,
        });
    }
}
