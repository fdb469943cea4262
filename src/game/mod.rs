pub mod action;
pub mod game;
pub mod players;
pub mod roster;
pub mod state;

pub use action::{ActionPayload, GameAction};
pub use game::Game;
pub use players::PlayerState;
pub use roster::{Roster, RosterError};
pub use state::{
    GameConfig, GameError, GameEvent, GamePhase, GameState, Selection, StepOutcome,
};
