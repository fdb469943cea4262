use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PieceKind {
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    King,
}

impl PieceKind {
    /// Roster display order, queen first and king last.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
        PieceKind::King,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn glyph(self) -> char {
        match self {
            PieceKind::King => '♚',
            PieceKind::Queen => '♛',
            PieceKind::Rook => '♜',
            PieceKind::Bishop => '♝',
            PieceKind::Knight => '♞',
            PieceKind::Pawn => '♟',
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub const ORDERED: [Color; 2] = [Color::Red, Color::Blue];

    /// Player-facing name, as shown in status lines.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    SelectRosterPiece,
    PlacePiece,
    TouchCell,
}
