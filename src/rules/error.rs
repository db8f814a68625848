//! Errors surfaced by the transition engine.
//!
//! Every variant except `CorruptHistory` is a rejected move: the caller
//! ignores it and the session is exactly as it was before the call.
//! `CorruptHistory` means the engine's own bookkeeping disagrees with
//! itself and must not be swallowed.

use crate::cards::Rank;
use crate::core::entity::CardId;
use crate::zones::Zone;

/// How a caller should treat a `MoveError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The move was refused; nothing changed.
    Rejected,
    /// Engine invariant violated; the session can't be trusted.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Fatal => "fatal",
        }
    }
}

fn zone_name(zone: &Option<Zone>) -> &'static str {
    zone.map_or("no zone", Zone::as_str)
}

/// Why a move or undo did nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("unknown card {0}")]
    UnknownCard(CardId),

    #[error("{card} is in {}, move requires {expected}", zone_name(.actual))]
    WrongZone {
        card: CardId,
        expected: Zone,
        actual: Option<Zone>,
    },

    #[error("cannot match {0}: Base is empty")]
    EmptyBase(CardId),

    #[error("cannot match {card}: rank {rank} is not adjacent to Base top rank {top_rank}")]
    RankMismatch {
        card: CardId,
        rank: Rank,
        top_rank: Rank,
    },

    /// Base does not look the way the most recent record says it should.
    #[error("corrupt history: record for {record} expects {expected:?} on Base, found {actual:?}")]
    CorruptHistory {
        record: CardId,
        expected: Option<CardId>,
        actual: Option<CardId>,
    },
}

impl MoveError {
    /// Classify the error.
    #[must_use]
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::CorruptHistory { .. } => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Rejected,
        }
    }

    /// True for engine bugs rather than refused user moves.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self.severity(), ErrorSeverity::Fatal)
    }
}
