use std::fmt::Write as _;

use crate::coords::Coord;
use crate::game::{GamePhase, GameState, Selection};

/// Cells drawn around the occupied bounding box.
const VIEW_BUFFER: i32 = 2;

/// Renders the occupied area (plus a buffer ring) as a text grid, top row
/// first. An empty board gets a 5x5 window around the origin.
pub fn render_board_to_string(state: &GameState) -> String {
    let (min, max) = state
        .board
        .bounds()
        .map(|(min, max)| {
            (
                Coord::new(min.x - VIEW_BUFFER, min.y - VIEW_BUFFER),
                Coord::new(max.x + VIEW_BUFFER, max.y + VIEW_BUFFER),
            )
        })
        .unwrap_or((Coord::new(-2, -2), Coord::new(2, 2)));

    let highlights: Vec<Coord> = state
        .selection_destinations()
        .map(|moves| moves.into_vec())
        .unwrap_or_default();
    let selected = match (state.phase, state.selection) {
        (GamePhase::Playing, Some(Selection::Board { origin })) => Some(origin),
        _ => None,
    };

    let mut out = String::new();
    for y in (min.y..=max.y).rev() {
        let _ = write!(out, "{y:>4} ");
        for x in min.x..=max.x {
            let cell = Coord::new(x, y);
            let glyph = match state.board.get(cell) {
                Some(piece) => piece.kind.glyph(),
                None if highlights.contains(&cell) => '·',
                None => ' ',
            };
            if selected == Some(cell) {
                let _ = write!(out, "[{glyph}]");
            } else {
                let _ = write!(out, " {glyph} ");
            }
        }
        out.push('\n');
    }

    let _ = write!(out, "     ");
    for x in min.x..=max.x {
        let _ = write!(out, "{:^3}", x.rem_euclid(10));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameAction, GameConfig, Roster};

    #[test]
    fn empty_board_renders_a_five_by_five_window() {
        let state = GameState::new(GameConfig::default());
        let rendered = render_board_to_string(&state);
        // 5 rows plus the column footer.
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn placed_pieces_show_their_glyphs() {
        let mut state = GameState::new(GameConfig {
            roster: Roster::king_only(),
        });
        state
            .step(GameAction::select_roster_piece(0, crate::types::PieceKind::King))
            .unwrap();
        state
            .step(GameAction::place_piece(0, Coord::new(0, 0)))
            .unwrap();
        let rendered = render_board_to_string(&state);
        assert!(rendered.contains('♚'));
    }
}
