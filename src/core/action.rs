//! Forward moves a player can issue.
//!
//! There are exactly two kinds, both of which send one card onto Base:
//! - `MatchPlayfield`: clear a Playfield card whose rank is adjacent to the Base top
//! - `ReplaceFromReserve`: draw any Reserve card onto Base, no rank check
//!
//! Undo is not a `Move`; it is issued separately through `GameState::undo`.

use serde::{Deserialize, Serialize};

use super::entity::CardId;

/// A forward move, naming the card it acts on.
///
/// ## Example
///
/// ```
/// use tripeaks_engine::core::{CardId, Move};
///
/// let m = Move::MatchPlayfield(CardId(4));
/// assert_eq!(m.card(), CardId(4));
/// assert!(m.is_match());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Playfield -> Base, requires circular rank adjacency.
    MatchPlayfield(CardId),
    /// Reserve -> Base, always legal for a Reserve card.
    ReplaceFromReserve(CardId),
}

impl Move {
    /// The card this move acts on.
    #[must_use]
    pub const fn card(self) -> CardId {
        match self {
            Move::MatchPlayfield(card) | Move::ReplaceFromReserve(card) => card,
        }
    }

    /// Is this a Playfield match?
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Move::MatchPlayfield(_))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::MatchPlayfield(card) => write!(f, "match {}", card),
            Move::ReplaceFromReserve(card) => write!(f, "replace {}", card),
        }
    }
}
