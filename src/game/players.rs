use serde::{Deserialize, Serialize};

use crate::game::roster::Roster;
use crate::types::Color;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub color: Color,
    pub roster: Roster,
}

impl PlayerState {
    pub fn new(color: Color, roster: Roster) -> Self {
        Self { color, roster }
    }

    pub fn has_pieces_to_place(&self) -> bool {
        !self.roster.is_empty()
    }
}
