use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

/// Multiset of piece kinds a player has yet to deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roster {
    counts: [u8; PieceKind::ALL.len()],
}

impl Default for Roster {
    fn default() -> Self {
        Self::standard()
    }
}

impl Roster {
    pub const fn from_counts(counts: [u8; 6]) -> Self {
        Self { counts }
    }

    pub const fn empty() -> Self {
        Self {
            counts: [0; PieceKind::ALL.len()],
        }
    }

    /// Standard composition: queen x1, rook x2, bishop x2, knight x2,
    /// pawn x2, king x1.
    pub const fn standard() -> Self {
        Self::from_counts([1, 2, 2, 2, 2, 1])
    }

    /// A lone king, used by reduced variants.
    pub const fn king_only() -> Self {
        Self::from_counts([0, 0, 0, 0, 0, 1])
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&v| v as u32).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&value| value == 0)
    }

    pub fn get(&self, kind: PieceKind) -> u8 {
        self.counts[kind.index()]
    }

    pub fn contains(&self, kind: PieceKind) -> bool {
        self.get(kind) > 0
    }

    /// The king may only be selected once it is the sole remaining entry.
    pub fn only_king_remaining(&self) -> bool {
        self.total() == 1 && self.contains(PieceKind::King)
    }

    pub fn take(&mut self, kind: PieceKind) -> Result<(), RosterError> {
        let idx = kind.index();
        if self.counts[idx] == 0 {
            return Err(RosterError::NotInRoster(kind));
        }
        self.counts[idx] -= 1;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        PieceKind::ALL.into_iter().zip(self.counts.iter().copied())
    }

    pub fn counts(&self) -> [u8; PieceKind::ALL.len()] {
        self.counts
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = vec![];
        for (kind, amount) in self.iter() {
            if amount > 0 {
                parts.push(format!("{amount}x{kind}"));
            }
        }
        write!(f, "{}", parts.join(", "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("no {0:?} left to place")]
    NotInRoster(PieceKind),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind::*;

    #[test]
    fn standard_roster_has_ten_pieces() {
        let roster = Roster::standard();
        assert_eq!(roster.total(), 10);
        assert_eq!(roster.get(Queen), 1);
        assert_eq!(roster.get(Rook), 2);
        assert_eq!(roster.get(King), 1);
    }

    #[test]
    fn take_decrements_until_exhausted() {
        let mut roster = Roster::standard();
        assert!(roster.take(Rook).is_ok());
        assert!(roster.take(Rook).is_ok());
        assert!(matches!(roster.take(Rook), Err(RosterError::NotInRoster(Rook))));
        assert_eq!(roster.get(Rook), 0);
    }

    #[test]
    fn king_is_last_only_when_sole_entry() {
        let mut roster = Roster::from_counts([0, 0, 0, 0, 1, 1]);
        assert!(!roster.only_king_remaining());
        roster.take(Pawn).unwrap();
        assert!(roster.only_king_remaining());
        roster.take(King).unwrap();
        assert!(roster.is_empty());
        assert!(!roster.only_king_remaining());
    }
}
