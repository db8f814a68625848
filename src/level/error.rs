//! Errors raised while turning a level into a session.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;

/// Which list of the level a bad entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelSection {
    Playfield,
    Stack,
}

impl std::fmt::Display for LevelSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelSection::Playfield => f.write_str("Playfield"),
            LevelSection::Stack => f.write_str("Stack"),
        }
    }
}

/// The level could not be turned into a session. Nothing was built.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("malformed level: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{section}[{index}]: card face {face} is out of range")]
    InvalidRank {
        section: LevelSection,
        index: usize,
        face: i32,
    },

    #[error("{section}[{index}]: card suit {suit} is out of range")]
    InvalidSuit {
        section: LevelSection,
        index: usize,
        suit: i32,
    },

    /// A registered card was not dealt into any zone.
    #[error("{0} is registered but not in any zone")]
    Unplaced(CardId),

    /// A zone holds an id the registry doesn't know.
    #[error("{0} is in a zone but not registered")]
    Unregistered(CardId),
}
