#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod board;
pub mod cli;
pub mod coords;
pub mod env;
pub mod game;
pub mod rules;
pub mod types;

pub use board::{Board, Piece};
pub use coords::{Coord, Direction};
pub use env::{GameEnv, Snapshot};
pub use game::{Game, GameConfig, GameState};
pub use types::{Color, PieceKind};
