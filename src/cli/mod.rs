pub mod board_display;

pub use board_display::render_board_to_string;

use std::str::FromStr;

use crate::coords::Coord;
use crate::game::GameAction;
use crate::types::PieceKind;

/// Parses one console command into an action for `player_index`.
///
/// Accepted forms: `select <kind>`, `place <x> <y>`, `cell <x> <y>`.
/// Piece kinds are case-insensitive (`queen`, `ROOK`, ...).
pub fn parse_command(line: &str, player_index: usize) -> Result<GameAction, ParseCommandError> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or(ParseCommandError::Empty)?;

    match verb.to_ascii_lowercase().as_str() {
        "select" => {
            let raw = words.next().ok_or(ParseCommandError::MissingArgument)?;
            let kind = PieceKind::from_str(&raw.to_ascii_uppercase())
                .map_err(|_| ParseCommandError::UnknownPiece(raw.to_string()))?;
            Ok(GameAction::select_roster_piece(player_index, kind))
        }
        "place" => {
            let cell = parse_cell(&mut words)?;
            Ok(GameAction::place_piece(player_index, cell))
        }
        "cell" => {
            let cell = parse_cell(&mut words)?;
            Ok(GameAction::touch_cell(player_index, cell))
        }
        other => Err(ParseCommandError::UnknownCommand(other.to_string())),
    }
}

fn parse_cell<'a>(
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord, ParseCommandError> {
    let x = words
        .next()
        .ok_or(ParseCommandError::MissingArgument)?
        .parse::<i32>()
        .map_err(|_| ParseCommandError::BadCoordinate)?;
    let y = words
        .next()
        .ok_or(ParseCommandError::MissingArgument)?
        .parse::<i32>()
        .map_err(|_| ParseCommandError::BadCoordinate)?;
    Ok(Coord::new(x, y))
}

#[derive(Debug, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("unknown piece kind: {0}")]
    UnknownPiece(String),
    #[error("command is missing an argument")]
    MissingArgument,
    #[error("coordinates must be integers")]
    BadCoordinate,
}
