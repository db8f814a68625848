//! Immutable descriptions of applied moves.

use serde::{Deserialize, Serialize};

use crate::core::action::Move;
use crate::core::config::Coordinate;
use crate::core::entity::CardId;
use crate::zones::Zone;

/// One accepted forward move, with everything needed to invert it.
///
/// Created only by the transition engine when a move is accepted and
/// never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum HistoryRecord {
    /// A Playfield card was matched onto Base.
    PlayfieldMatch {
        card: CardId,
        from: Coordinate,
        previous_top: Option<CardId>,
    },
    /// A Reserve card was moved onto Base.
    ReserveReplace {
        card: CardId,
        from: Coordinate,
        previous_top: Option<CardId>,
        /// Position in the Reserve before the move.
        reserve_index: usize,
    },
}

impl HistoryRecord {
    /// The card that moved onto Base.
    #[must_use]
    pub const fn card(&self) -> CardId {
        match *self {
            HistoryRecord::PlayfieldMatch { card, .. } | HistoryRecord::ReserveReplace { card, .. } => {
                card
            }
        }
    }

    /// The coordinate the card occupied before the move.
    #[must_use]
    pub const fn from(&self) -> Coordinate {
        match *self {
            HistoryRecord::PlayfieldMatch { from, .. } | HistoryRecord::ReserveReplace { from, .. } => {
                from
            }
        }
    }

    /// The Base top before the move; it becomes visible again on undo.
    #[must_use]
    pub const fn previous_top(&self) -> Option<CardId> {
        match *self {
            HistoryRecord::PlayfieldMatch { previous_top, .. }
            | HistoryRecord::ReserveReplace { previous_top, .. } => previous_top,
        }
    }

    /// The zone the card came from and returns to on undo.
    #[must_use]
    pub const fn source_zone(&self) -> Zone {
        match self {
            HistoryRecord::PlayfieldMatch { .. } => Zone::Playfield,
            HistoryRecord::ReserveReplace { .. } => Zone::Reserve,
        }
    }

    /// The forward move this record describes.
    #[must_use]
    pub const fn as_move(&self) -> Move {
        match *self {
            HistoryRecord::PlayfieldMatch { card, .. } => Move::MatchPlayfield(card),
            HistoryRecord::ReserveReplace { card, .. } => Move::ReplaceFromReserve(card),
        }
    }
}
