//! Transition engine: the only code that moves cards between zones.
//!
//! Forward moves:
//! - `match_playfield`: Playfield -> Base, rank must be circularly adjacent
//!   to the Base top
//! - `replace_from_reserve`: Reserve -> Base, no rank check
//!
//! Both push the card onto Base (the old top stays buried underneath),
//! move it to the configured Base slot and append a `HistoryRecord`.
//! `undo` inverts the most recent record. Every check runs before the
//! first mutation, so a rejected call leaves the session untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

use super::error::MoveError;
use crate::core::action::Move;
use crate::core::config::Coordinate;
use crate::core::entity::CardId;
use crate::core::state::GameState;
use crate::history::HistoryRecord;
use crate::zones::Zone;

/// Result of a successful `undo` call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum UndoOutcome {
    /// The record was inverted and discarded.
    Undone(HistoryRecord),
    /// History was empty; nothing changed.
    NothingToUndo,
}

impl UndoOutcome {
    /// The consumed record, if anything was undone.
    #[must_use]
    pub fn record(&self) -> Option<&HistoryRecord> {
        match self {
            UndoOutcome::Undone(record) => Some(record),
            UndoOutcome::NothingToUndo => None,
        }
    }

    #[must_use]
    pub fn is_nothing_to_undo(&self) -> bool {
        matches!(self, UndoOutcome::NothingToUndo)
    }
}

impl GameState {
    // === Forward moves ===

    /// Match a Playfield card onto Base.
    ///
    /// Checks, first failure wins: card exists, card is in Playfield,
    /// Base is non-empty, ranks are circularly adjacent.
    /// Returns the new Base top (the matched card).
    pub fn match_playfield(&mut self, card: CardId) -> Result<CardId, MoveError> {
        let from = self
            .check_match(card)
            .inspect_err(|err| trace!(%card, error = %err, "match rejected"))?;

        let previous_top = self.zones.base_top();
        self.zones.playfield_remove(card);
        self.land_on_base(card);
        self.history.append(HistoryRecord::PlayfieldMatch {
            card,
            from,
            previous_top,
        });

        debug!(%card, ?previous_top, history = self.history.len(), "playfield match");
        Ok(card)
    }

    /// Move any Reserve card onto Base.
    ///
    /// Unlike a match there is no rank requirement: drawing from the
    /// Reserve is always allowed. Returns the new Base top.
    pub fn replace_from_reserve(&mut self, card: CardId) -> Result<CardId, MoveError> {
        let (from, reserve_index) = self
            .check_replace(card)
            .inspect_err(|err| trace!(%card, error = %err, "replace rejected"))?;

        let previous_top = self.zones.base_top();
        self.zones.reserve_remove(card);
        self.land_on_base(card);
        self.history.append(HistoryRecord::ReserveReplace {
            card,
            from,
            previous_top,
            reserve_index,
        });

        debug!(%card, ?previous_top, reserve_index, history = self.history.len(), "reserve replace");
        Ok(card)
    }

    /// Apply a forward move.
    pub fn apply(&mut self, mv: Move) -> Result<CardId, MoveError> {
        match mv {
            Move::MatchPlayfield(card) => self.match_playfield(card),
            Move::ReplaceFromReserve(card) => self.replace_from_reserve(card),
        }
    }

    /// Check whether a move would be accepted, without applying it.
    pub fn check(&self, mv: Move) -> Result<(), MoveError> {
        match mv {
            Move::MatchPlayfield(card) => self.check_match(card).map(|_| ()),
            Move::ReplaceFromReserve(card) => self.check_replace(card).map(|_| ()),
        }
    }

    /// Every forward move currently accepted.
    ///
    /// Playfield matches come first (ascending card id), then one
    /// replace per Reserve card in Reserve order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let matches = self
            .zones
            .playfield()
            .into_iter()
            .filter(|&card| self.check_match(card).is_ok())
            .map(Move::MatchPlayfield);
        let replaces = self.zones.reserve().iter().copied().map(Move::ReplaceFromReserve);

        matches.chain(replaces).collect()
    }

    // === Undo ===

    /// Invert the most recent move.
    ///
    /// Pops the record's card off Base (the card beneath becomes the live
    /// top again), returns it to its source zone and restores its
    /// coordinate. Reserve cards go back to the index they left.
    ///
    /// Empty history is not an error: it yields `UndoOutcome::NothingToUndo`.
    /// If Base does not match the record, nothing is changed and
    /// `MoveError::CorruptHistory` is returned.
    pub fn undo(&mut self) -> Result<UndoOutcome, MoveError> {
        let Some(record) = self.history.last().copied() else {
            trace!("nothing to undo");
            return Ok(UndoOutcome::NothingToUndo);
        };

        self.check_undo(&record)
            .inspect_err(|err| error!(error = %err, "history does not match Base"))?;

        self.history.pop_last();
        let card = record.card();
        self.zones.base_pop();
        match record {
            HistoryRecord::PlayfieldMatch { .. } => self.zones.playfield_add(card),
            HistoryRecord::ReserveReplace { reserve_index, .. } => {
                self.zones.reserve_insert(reserve_index, card)
            }
        }
        self.registry.set_coordinate(card, record.from());

        debug!(
            %card,
            zone = %record.source_zone(),
            base_top = ?self.zones.base_top(),
            history = self.history.len(),
            "undo"
        );
        Ok(UndoOutcome::Undone(record))
    }

    // === Validation ===

    fn require_zone(&self, card: CardId, expected: Zone) -> Result<(), MoveError> {
        let actual = self.zones.zone_of(card);
        if actual == Some(expected) {
            Ok(())
        } else {
            Err(MoveError::WrongZone {
                card,
                expected,
                actual,
            })
        }
    }

    /// Validate a match; returns the card's current coordinate.
    fn check_match(&self, card: CardId) -> Result<Coordinate, MoveError> {
        let moving = self.registry.get(card).ok_or(MoveError::UnknownCard(card))?;
        self.require_zone(card, Zone::Playfield)?;

        let top_id = self.zones.base_top().ok_or(MoveError::EmptyBase(card))?;
        let top = self.registry.get(top_id).ok_or(MoveError::UnknownCard(top_id))?;

        if !moving.can_match(top) {
            return Err(MoveError::RankMismatch {
                card,
                rank: moving.rank(),
                top_rank: top.rank(),
            });
        }
        Ok(moving.coordinate)
    }

    /// Validate a replace; returns the card's coordinate and Reserve index.
    fn check_replace(&self, card: CardId) -> Result<(Coordinate, usize), MoveError> {
        let moving = self.registry.get(card).ok_or(MoveError::UnknownCard(card))?;
        self.require_zone(card, Zone::Reserve)?;
        let index = self.zones.reserve_position(card).ok_or(MoveError::WrongZone {
            card,
            expected: Zone::Reserve,
            actual: None,
        })?;
        Ok((moving.coordinate, index))
    }

    /// The record's card must be the Base top, with the recorded previous
    /// top directly beneath it.
    fn check_undo(&self, record: &HistoryRecord) -> Result<(), MoveError> {
        let card = record.card();
        let base = self.zones.base();

        let top = base.last().copied();
        if top != Some(card) || !self.registry.contains(card) {
            return Err(MoveError::CorruptHistory {
                record: card,
                expected: Some(card),
                actual: top,
            });
        }

        let beneath = base.len().checked_sub(2).map(|i| base[i]);
        if beneath != record.previous_top() {
            return Err(MoveError::CorruptHistory {
                record: card,
                expected: record.previous_top(),
                actual: beneath,
            });
        }
        Ok(())
    }

    fn land_on_base(&mut self, card: CardId) {
        self.zones.base_push(card);
        self.registry.set_coordinate(card, self.config.base_slot);
    }
}
