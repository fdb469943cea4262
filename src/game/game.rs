use uuid::Uuid;

use crate::game::action::GameAction;
use crate::game::{GameConfig, GameError, GamePhase, GameState, StepOutcome};
use crate::types::Color;

pub struct Game {
    pub id: Uuid,
    pub state: GameState,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: GameState::new(config),
        }
    }

    pub fn step(&mut self, action: GameAction) -> Result<StepOutcome, GameError> {
        self.state.step(action)
    }

    pub fn winning_color(&self) -> Option<Color> {
        match self.state.phase {
            GamePhase::Completed { winner } => {
                winner.and_then(|idx| self.state.players.get(idx).map(|p| p.color))
            }
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state.phase, GamePhase::Completed { .. })
    }

    pub fn copy(&self) -> Self {
        Self {
            id: self.id,
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Coord;
    use crate::game::{GamePhase, Roster};
    use crate::types::PieceKind::King;

    fn kings_only_game() -> Game {
        Game::new(GameConfig {
            roster: Roster::king_only(),
        })
    }

    #[test]
    fn reports_winner_after_king_capture() {
        let mut game = kings_only_game();
        assert!(!game.is_over());
        assert!(game.winning_color().is_none());

        game.step(GameAction::select_roster_piece(0, King)).unwrap();
        game.step(GameAction::place_piece(0, Coord::new(0, 0)))
            .unwrap();
        game.step(GameAction::select_roster_piece(1, King)).unwrap();
        game.step(GameAction::place_piece(1, Coord::new(1, 0)))
            .unwrap();

        game.step(GameAction::touch_cell(0, Coord::new(0, 0)))
            .unwrap();
        let outcome = game
            .step(GameAction::touch_cell(0, Coord::new(1, 0)))
            .unwrap();
        assert!(outcome.done);
        assert!(game.is_over());
        assert_eq!(game.winning_color(), Some(Color::Red));
    }

    #[test]
    fn winning_color_is_none_while_playing_or_drawn() {
        let mut game = kings_only_game();
        assert_eq!(game.winning_color(), None);
        game.state.phase = GamePhase::Completed { winner: None };
        assert!(game.is_over());
        assert_eq!(game.winning_color(), None);
    }

    #[test]
    fn copy_keeps_the_id_and_forks_the_state() {
        let game = kings_only_game();
        let mut copy = game.copy();
        assert_eq!(copy.id, game.id);
        copy.state.phase = GamePhase::Completed { winner: Some(1) };
        assert_eq!(game.state.phase, GamePhase::Deployment);
        assert_eq!(copy.winning_color(), Some(Color::Blue));
    }
}
